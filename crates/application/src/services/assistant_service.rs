//! Assistant service - Chat completion followed by speech synthesis
//!
//! Orchestrates the reply flow: assemble the conversation (system prompt,
//! client-supplied history in order, final user turn), generate the reply
//! text, then synthesize it. A synthesis failure does not discard the reply
//! text; the caller gets the text with an audio error indicator instead.

use std::{fmt, sync::Arc, time::Instant};

use domain::{ChatMessage, Conversation};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{InferencePort, SpeechPort, SynthesisResult},
};

/// System instruction prepended to every conversation
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful voice assistant. Keep your answers concise and conversational.";

/// Reply produced for a chat request
#[derive(Debug, Clone)]
pub struct VoiceReply {
    /// Generated reply text
    pub reply_text: String,
    /// Synthesized reply audio; `None` when synthesis failed
    pub reply_audio: Option<SynthesisResult>,
    /// Generic description of the synthesis failure, if any
    pub audio_error: Option<String>,
    /// Model that generated the reply
    pub model: String,
    /// End-to-end latency in milliseconds
    pub latency_ms: u64,
}

/// Service for handling chat requests with spoken replies
pub struct AssistantService {
    inference: Arc<dyn InferencePort>,
    speech: Arc<dyn SpeechPort>,
    system_prompt: String,
}

impl fmt::Debug for AssistantService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantService")
            .field("system_prompt", &self.system_prompt)
            .finish_non_exhaustive()
    }
}

impl AssistantService {
    /// Create a new assistant service with the default system prompt
    pub fn new(inference: Arc<dyn InferencePort>, speech: Arc<dyn SpeechPort>) -> Self {
        Self::with_system_prompt(inference, speech, DEFAULT_SYSTEM_PROMPT)
    }

    /// Create an assistant service with a custom system prompt
    pub fn with_system_prompt(
        inference: Arc<dyn InferencePort>,
        speech: Arc<dyn SpeechPort>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            inference,
            speech,
            system_prompt: prompt.into(),
        }
    }

    /// Generate a reply for `user_text` and synthesize it
    ///
    /// The submitted message sequence is: system prompt, `history` in its
    /// original order, then a final user message containing `user_text`.
    #[instrument(skip(self, user_text, history), fields(
        text_len = user_text.len(),
        history_len = history.len()
    ))]
    pub async fn chat_and_speak(
        &self,
        user_text: &str,
        history: Vec<ChatMessage>,
        voice: Option<String>,
    ) -> Result<VoiceReply, ApplicationError> {
        let start = Instant::now();

        let mut conversation = Conversation::with_system_prompt(&self.system_prompt);
        conversation.extend_history(history);
        conversation.add_user_message(user_text);

        let result = self
            .inference
            .generate_with_context(&conversation)
            .await?;

        debug!(
            model = %result.model,
            tokens = ?result.tokens_used,
            "Chat reply generated"
        );

        let (reply_audio, audio_error) =
            match self.speech.synthesize(result.content.clone(), voice).await {
                Ok(audio) => (Some(audio), None),
                Err(e) => {
                    warn!(error = %e, "Synthesis failed, returning text-only reply");
                    (None, Some("speech synthesis unavailable".to_string()))
                },
            };

        #[allow(clippy::cast_possible_truncation)]
        let latency_ms = start.elapsed().as_millis() as u64;

        Ok(VoiceReply {
            reply_text: result.content,
            reply_audio,
            audio_error,
            model: result.model,
            latency_ms,
        })
    }

    /// Check if the underlying inference backend is healthy
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Get the current model name
    pub fn current_model(&self) -> &str {
        self.inference.current_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{InferenceResult, MockInferencePort, MockSpeechPort, SynthesisResult};
    use domain::MessageRole;

    fn inference_ok(reply: &str) -> MockInferencePort {
        let reply = reply.to_string();
        let mut mock = MockInferencePort::new();
        mock.expect_generate_with_context().returning(move |_| {
            Ok(InferenceResult {
                content: reply.clone(),
                model: "gpt-3.5-turbo-0125".to_string(),
                tokens_used: Some(20),
                latency_ms: 50,
            })
        });
        mock
    }

    fn speech_ok(bytes: &[u8]) -> MockSpeechPort {
        let bytes = bytes.to_vec();
        let mut mock = MockSpeechPort::new();
        mock.expect_synthesize().returning(move |_, _| {
            Ok(SynthesisResult {
                audio_data: bytes.clone(),
                mime_type: "audio/mpeg".to_string(),
            })
        });
        mock
    }

    #[tokio::test]
    async fn reply_carries_text_and_audio() {
        let service = AssistantService::new(
            Arc::new(inference_ok("Sure thing.")),
            Arc::new(speech_ok(b"mp3-bytes")),
        );

        let reply = service
            .chat_and_speak("Can you help?", Vec::new(), None)
            .await
            .unwrap();

        assert_eq!(reply.reply_text, "Sure thing.");
        assert_eq!(reply.reply_audio.unwrap().audio_data, b"mp3-bytes");
        assert!(reply.audio_error.is_none());
    }

    #[tokio::test]
    async fn empty_history_submits_system_and_user_only() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate_with_context()
            .withf(|conv: &Conversation| {
                conv.system_prompt.as_deref() == Some(DEFAULT_SYSTEM_PROMPT)
                    && conv.message_count() == 1
                    && conv.messages[0].role == MessageRole::User
                    && conv.messages[0].content == "hello"
            })
            .returning(|_| {
                Ok(InferenceResult {
                    content: "hi".to_string(),
                    model: "m".to_string(),
                    tokens_used: None,
                    latency_ms: 1,
                })
            });

        let service =
            AssistantService::new(Arc::new(inference), Arc::new(speech_ok(b"x")));
        service.chat_and_speak("hello", Vec::new(), None).await.unwrap();
    }

    #[tokio::test]
    async fn history_order_is_preserved_between_system_and_final_user() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate_with_context()
            .withf(|conv: &Conversation| {
                let contents: Vec<&str> =
                    conv.messages.iter().map(|m| m.content.as_str()).collect();
                contents == ["q1", "a1", "q2"]
                    && conv.messages[2].role == MessageRole::User
                    && conv.system_prompt.is_some()
            })
            .returning(|_| {
                Ok(InferenceResult {
                    content: "a2".to_string(),
                    model: "m".to_string(),
                    tokens_used: None,
                    latency_ms: 1,
                })
            });

        let history = vec![ChatMessage::user("q1"), ChatMessage::assistant("a1")];
        let service =
            AssistantService::new(Arc::new(inference), Arc::new(speech_ok(b"x")));
        service.chat_and_speak("q2", history, None).await.unwrap();
    }

    #[tokio::test]
    async fn requested_voice_is_forwarded() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|_, voice| voice.as_deref() == Some("shimmer"))
            .returning(|_, _| {
                Ok(SynthesisResult {
                    audio_data: vec![1],
                    mime_type: "audio/mpeg".to_string(),
                })
            });

        let service =
            AssistantService::new(Arc::new(inference_ok("ok")), Arc::new(speech));
        service
            .chat_and_speak("hi", Vec::new(), Some("shimmer".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn synthesis_failure_keeps_reply_text() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .returning(|_, _| Err(ApplicationError::ExternalService("tts down".to_string())));

        let service = AssistantService::new(
            Arc::new(inference_ok("still here")),
            Arc::new(speech),
        );
        let reply = service.chat_and_speak("hi", Vec::new(), None).await.unwrap();

        assert_eq!(reply.reply_text, "still here");
        assert!(reply.reply_audio.is_none());
        assert!(reply.audio_error.is_some());
    }

    #[tokio::test]
    async fn inference_failure_propagates() {
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate_with_context()
            .returning(|_| Err(ApplicationError::Inference("quota".to_string())));

        let mut speech = MockSpeechPort::new();
        speech.expect_synthesize().times(0);

        let service = AssistantService::new(Arc::new(inference), Arc::new(speech));
        let err = service
            .chat_and_speak("hi", Vec::new(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Inference(_)));
    }
}
