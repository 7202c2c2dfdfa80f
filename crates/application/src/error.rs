//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded upstream
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_is_retryable() {
        assert!(ApplicationError::ExternalService("down".to_string()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
    }

    #[test]
    fn domain_error_is_not_retryable() {
        let err = ApplicationError::Domain(DomainError::validation("bad"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError = DomainError::validation("text empty").into();
        assert_eq!(err.to_string(), "Validation failed: text empty");
    }

    #[test]
    fn inference_error_message() {
        let err = ApplicationError::Inference("model unavailable".to_string());
        assert_eq!(err.to_string(), "Inference error: model unavailable");
    }
}
