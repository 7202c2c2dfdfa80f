//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Unknown message role in conversation history
    #[error("Invalid message role: {0}")]
    InvalidRole(String),

    /// Audio payload is empty or unreadable
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
