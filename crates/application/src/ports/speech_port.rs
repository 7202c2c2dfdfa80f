//! Speech port - Interface for speech-to-text and text-to-speech operations

use async_trait::async_trait;
use domain::AudioUpload;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text
    pub text: String,
    /// Detected language code (e.g., "en", "de")
    pub detected_language: Option<String>,
    /// Duration of audio in milliseconds
    pub duration_ms: Option<u64>,
}

/// Result of a speech synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Generated audio data
    pub audio_data: Vec<u8>,
    /// MIME type of the audio
    pub mime_type: String,
}

/// Port for speech processing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe uploaded audio to text (Speech-to-Text)
    ///
    /// Filename and content type are passed through to the external service;
    /// no local format validation happens here.
    async fn transcribe(
        &self,
        upload: AudioUpload,
    ) -> Result<TranscriptionResult, ApplicationError>;

    /// Synthesize speech from text (Text-to-Speech)
    ///
    /// `voice` overrides the configured default voice when given. The value
    /// is not validated locally; invalid voices surface as upstream errors.
    async fn synthesize(
        &self,
        text: String,
        voice: Option<String>,
    ) -> Result<SynthesisResult, ApplicationError>;

    /// Check if the speech service is available
    async fn is_available(&self) -> bool;
}
