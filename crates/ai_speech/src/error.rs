//! Error types for speech processing

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the speech service
    #[error("Failed to connect to speech service: {0}")]
    ConnectionFailed(String),

    /// Request to the speech service failed
    #[error("Speech request failed: {0}")]
    RequestFailed(String),

    /// Audio input is invalid or unsupported
    #[error("Invalid audio input: {0}")]
    InvalidAudio(String),

    /// Transcription failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Speech synthesis failed
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Service returned an unexpected response
    #[error("Invalid response from speech service: {0}")]
    InvalidResponse(String),

    /// Authorization was rejected by the service
    #[error("Speech service rejected credentials: {0}")]
    Unauthorized(String),

    /// Request timed out
    #[error("Speech request timed out after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Speech service rate limit exceeded")]
    RateLimited,

    /// Requested voice is not available
    #[error("Voice not available: {0}")]
    VoiceNotFound(String),

    /// Requested model is not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Configuration error
    #[error("Speech configuration error: {0}")]
    Configuration(String),
}
