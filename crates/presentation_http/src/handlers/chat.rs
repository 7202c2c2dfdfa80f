//! Chat handler - text in, reply text plus spoken audio out

use axum::{Json, extract::State};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use domain::{ChatMessage, MessageRole};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// A single prior turn supplied by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sender role (`user`, `assistant` or `system`)
    pub role: MessageRole,
    /// Message content
    pub content: String,
}

/// Chat request body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    pub text: String,
    /// Prior conversation turns, oldest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Voice to use for the spoken reply
    #[serde(default)]
    pub voice: Option<String>,
}

/// Chat response body
///
/// `reply_audio` is `null` when synthesis failed; the reply text is still
/// returned and `audio_error` names the failure generically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated reply text
    pub reply_text: String,
    /// Base64-encoded reply audio
    pub reply_audio: Option<String>,
    /// Present when synthesis failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_error: Option<String>,
}

/// Generate a reply for the user's message and synthesize it
#[instrument(skip(state, request), fields(
    text_len = request.text.len(),
    history_len = request.history.len()
))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text must not be empty".to_string()));
    }

    let history: Vec<ChatMessage> = request
        .history
        .into_iter()
        .map(|entry| ChatMessage::new(entry.role, entry.content))
        .collect();

    let reply = state
        .assistant_service
        .chat_and_speak(&request.text, history, request.voice)
        .await
        .map_err(|e| state.api_error(e))?;

    debug!(
        model = %reply.model,
        latency_ms = reply.latency_ms,
        has_audio = reply.reply_audio.is_some(),
        "Chat reply ready"
    );

    let reply_audio = reply
        .reply_audio
        .map(|audio| BASE64.encode(audio.audio_data));

    Ok(Json(ChatResponse {
        reply_text: reply.reply_text,
        reply_audio,
        audio_error: reply.audio_error,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_history_and_voice() {
        let request: ChatRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(request.text, "hi");
        assert!(request.history.is_empty());
        assert!(request.voice.is_none());
    }

    #[test]
    fn history_roles_parse_lowercase() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"text": "next", "history": [
                {"role": "user", "content": "q"},
                {"role": "assistant", "content": "a"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(request.history[0].role, MessageRole::User);
        assert_eq!(request.history[1].role, MessageRole::Assistant);
    }

    #[test]
    fn unknown_history_role_is_rejected() {
        let result: Result<ChatRequest, _> = serde_json::from_str(
            r#"{"text": "hi", "history": [{"role": "moderator", "content": "x"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn response_keeps_null_audio_field() {
        let resp = ChatResponse {
            reply_text: "hi".to_string(),
            reply_audio: None,
            audio_error: Some("speech synthesis unavailable".to_string()),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["reply_audio"].is_null());
        assert_eq!(json["audio_error"], "speech synthesis unavailable");
    }

    #[test]
    fn response_omits_audio_error_when_absent() {
        let resp = ChatResponse {
            reply_text: "hi".to_string(),
            reply_audio: Some("bW9jaw==".to_string()),
            audio_error: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("audio_error"));
    }
}
