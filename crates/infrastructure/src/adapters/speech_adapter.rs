//! Speech port adapter
//!
//! Maps the OpenAI speech provider onto the application's `SpeechPort`.

use ai_speech::{
    AudioInput, OpenAISpeechProvider, SpeechError, SpeechToText, TextToSpeech,
};
use application::error::ApplicationError;
use application::ports::{SpeechPort, SynthesisResult, TranscriptionResult};
use async_trait::async_trait;
use domain::{AudioUpload, DomainError};
use tracing::instrument;

/// `SpeechPort` implementation backed by the OpenAI speech provider
#[derive(Debug, Clone)]
pub struct OpenAISpeechAdapter {
    provider: OpenAISpeechProvider,
}

impl OpenAISpeechAdapter {
    /// Wrap a speech provider
    #[must_use]
    pub const fn new(provider: OpenAISpeechProvider) -> Self {
        Self { provider }
    }
}

fn map_speech_error(err: SpeechError) -> ApplicationError {
    match err {
        SpeechError::RateLimited => ApplicationError::RateLimited,
        SpeechError::InvalidAudio(msg) => {
            ApplicationError::Domain(DomainError::InvalidAudio(msg))
        },
        SpeechError::ConnectionFailed(msg) | SpeechError::RequestFailed(msg) => {
            ApplicationError::ExternalService(msg)
        },
        SpeechError::Timeout(ms) => {
            ApplicationError::ExternalService(format!("speech request timed out after {ms}ms"))
        },
        SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl SpeechPort for OpenAISpeechAdapter {
    #[instrument(skip(self, upload), fields(audio_size = upload.size_bytes()))]
    async fn transcribe(
        &self,
        upload: AudioUpload,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let mut audio = AudioInput::new(upload.data);
        if let Some(filename) = upload.filename {
            audio = audio.with_filename(filename);
        }
        if let Some(content_type) = upload.content_type {
            audio = audio.with_mime_type(content_type);
        }

        let transcription = self
            .provider
            .transcribe(audio)
            .await
            .map_err(map_speech_error)?;

        Ok(TranscriptionResult {
            text: transcription.text,
            detected_language: transcription.language,
            duration_ms: transcription.duration_ms,
        })
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: String,
        voice: Option<String>,
    ) -> Result<SynthesisResult, ApplicationError> {
        let audio = self
            .provider
            .synthesize(&text, voice.as_deref())
            .await
            .map_err(map_speech_error)?;

        Ok(SynthesisResult {
            audio_data: audio.data,
            mime_type: audio.mime_type,
        })
    }

    async fn is_available(&self) -> bool {
        SpeechToText::is_available(&self.provider).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_speech::SpeechConfig;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter_for(mock_server: &MockServer) -> OpenAISpeechAdapter {
        let provider = OpenAISpeechProvider::new(SpeechConfig {
            api_key: Some("test-key".to_string()),
            base_url: mock_server.uri(),
            ..Default::default()
        })
        .unwrap();
        OpenAISpeechAdapter::new(provider)
    }

    #[tokio::test]
    async fn transcribes_upload_with_metadata() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "hello from audio",
                "language": "en"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let upload = AudioUpload::new(
            vec![1, 2, 3],
            Some("clip.webm".to_string()),
            Some("audio/webm".to_string()),
        )
        .unwrap();

        let adapter = adapter_for(&mock_server);
        let result = adapter.transcribe(upload).await.unwrap();

        assert_eq!(result.text, "hello from audio");
        assert_eq!(result.detected_language, Some("en".to_string()));
    }

    #[tokio::test]
    async fn synthesize_forwards_voice() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/speech"))
            .and(body_partial_json(serde_json::json!({"voice": "shimmer"})))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 64]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let result = adapter
            .synthesize("hello".to_string(), Some("shimmer".to_string()))
            .await
            .unwrap();

        assert_eq!(result.audio_data.len(), 64);
        assert_eq!(result.mime_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn transcription_failure_maps_to_external_service() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "error": {"message": "whisper down"}
            })))
            .mount(&mock_server)
            .await;

        let upload = AudioUpload::new(vec![1, 2, 3], None, None).unwrap();

        let adapter = adapter_for(&mock_server);
        let err = adapter.transcribe(upload).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn rate_limit_maps_to_application_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/speech"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "slow down", "code": "rate_limit_exceeded"}
            })))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let err = adapter
            .synthesize("hello".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::RateLimited));
    }
}
