//! Audio transcription handler

use axum::{Json, extract::Multipart, extract::State};
use domain::AudioUpload;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Transcription response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscribeResponse {
    /// Transcribed text
    pub text: String,
}

/// Transcribe an uploaded audio recording
///
/// Expects a multipart form with a `file` field. Byte-identical uploads are
/// served from the transcript cache.
#[instrument(skip(state, multipart))]
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut upload: Option<AudioUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(ToString::to_string);
        let content_type = field.content_type().map(ToString::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;

        upload = Some(
            AudioUpload::new(data.to_vec(), filename, content_type)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        );
        break;
    }

    let upload =
        upload.ok_or_else(|| ApiError::BadRequest("Missing 'file' field".to_string()))?;

    debug!(
        audio_size = upload.size_bytes(),
        content_type = ?upload.content_type,
        "Received audio upload"
    );

    let outcome = state
        .transcription_service
        .transcribe(upload)
        .await
        .map_err(|e| state.api_error(e))?;

    debug!(cached = outcome.cached, "Transcription served");

    Ok(Json(TranscribeResponse { text: outcome.text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_only_text() {
        let resp = TranscribeResponse {
            text: "hello".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hello"}));
    }
}
