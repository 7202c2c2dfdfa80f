//! Inference port adapter
//!
//! Maps the `InferenceEngine` client onto the application's `InferencePort`,
//! translating request/response shapes and errors.

use std::time::Instant;

use ai_core::{InferenceEngine, InferenceError, InferenceRequest, OpenAIInferenceEngine};
use application::error::ApplicationError;
use application::ports::{InferencePort, InferenceResult};
use async_trait::async_trait;
use domain::Conversation;
use tracing::{debug, instrument};

/// `InferencePort` implementation backed by the OpenAI inference engine
#[derive(Debug)]
pub struct OpenAIInferenceAdapter {
    engine: OpenAIInferenceEngine,
}

impl OpenAIInferenceAdapter {
    /// Wrap an inference engine
    #[must_use]
    pub const fn new(engine: OpenAIInferenceEngine) -> Self {
        Self { engine }
    }
}

fn map_inference_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::RateLimited => ApplicationError::RateLimited,
        InferenceError::ConnectionFailed(msg) => {
            ApplicationError::ExternalService(format!("inference connection failed: {msg}"))
        },
        InferenceError::Timeout(ms) => {
            ApplicationError::ExternalService(format!("inference timed out after {ms}ms"))
        },
        InferenceError::Configuration(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::Inference(other.to_string()),
    }
}

#[async_trait]
impl InferencePort for OpenAIInferenceAdapter {
    #[instrument(skip(self, conversation), fields(message_count = conversation.message_count()))]
    async fn generate_with_context(
        &self,
        conversation: &Conversation,
    ) -> Result<InferenceResult, ApplicationError> {
        let request = InferenceRequest::from_conversation(conversation);
        let started = Instant::now();

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(map_inference_error)?;

        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(model = %response.model, latency_ms, "Inference complete");

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    async fn is_healthy(&self) -> bool {
        self.engine.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> &str {
        self.engine.default_model()
    }
}
