//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the inference service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request rejected as unauthorized (missing or invalid credential)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server returned an error response
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Requested model is not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}
