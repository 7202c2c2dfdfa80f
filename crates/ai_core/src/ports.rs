//! Port definitions for the inference engine

use async_trait::async_trait;
use domain::{ChatMessage, Conversation};
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Messages in the conversation, in submission order
    pub messages: Vec<InferenceMessage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A message in the inference request (OpenAI wire format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceMessage {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for InferenceMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        }
    }
}

impl InferenceRequest {
    /// Create a simple single-turn request
    pub fn simple(user_message: impl Into<String>) -> Self {
        Self {
            messages: vec![InferenceMessage {
                role: "user".to_string(),
                content: user_message.into(),
            }],
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Build a request from a conversation
    ///
    /// The system prompt (if set) becomes the first message, followed by the
    /// conversation messages in their original order.
    pub fn from_conversation(conversation: &Conversation) -> Self {
        let mut messages = Vec::with_capacity(conversation.message_count() + 1);

        if let Some(system) = &conversation.system_prompt {
            messages.push(InferenceMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }

        messages.extend(conversation.messages.iter().map(InferenceMessage::from));

        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the model for this request
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set temperature
    #[must_use]
    pub const fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }
}

/// Response from inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated content (first choice)
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Port for inference engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Check if the inference service is reachable
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// Get the current default model
    fn default_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_request_simple() {
        let req = InferenceRequest::simple("Hello");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "Hello");
    }

    #[test]
    fn from_conversation_prepends_system_prompt() {
        let mut conv = Conversation::with_system_prompt("You are helpful");
        conv.add_user_message("Hi");

        let req = InferenceRequest::from_conversation(&conv);

        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, "system");
        assert_eq!(req.messages[0].content, "You are helpful");
        assert_eq!(req.messages[1].role, "user");
        assert_eq!(req.messages[1].content, "Hi");
    }

    #[test]
    fn from_conversation_preserves_history_order() {
        let mut conv = Conversation::with_system_prompt("sys");
        conv.add_user_message("one");
        conv.add_assistant_message("two");
        conv.add_user_message("three");

        let req = InferenceRequest::from_conversation(&conv);

        let roles: Vec<&str> = req.messages.iter().map(|m| m.role.as_str()).collect();
        let contents: Vec<&str> = req.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(roles, ["system", "user", "assistant", "user"]);
        assert_eq!(contents, ["sys", "one", "two", "three"]);
    }

    #[test]
    fn from_conversation_without_system_prompt() {
        let mut conv = Conversation::new();
        conv.add_user_message("only");

        let req = InferenceRequest::from_conversation(&conv);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
    }

    #[test]
    fn with_model_overrides_default() {
        let req = InferenceRequest::simple("Test").with_model("gpt-4o");
        assert_eq!(req.model, Some("gpt-4o".to_string()));
    }

    #[test]
    fn optional_fields_are_skipped_in_serialization() {
        let req = InferenceRequest::simple("Test");
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("model"));
    }
}
