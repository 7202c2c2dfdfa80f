//! API error handling
//!
//! Every failure renders as a JSON body with an `error` message and a stable
//! `code`. Upstream and internal failure details are only included when the
//! caller opted in at conversion time (development environments); production
//! responses carry generic messages.

use application::error::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
///
/// A closed set: every handler failure is one of these, so every status code
/// the API can produce is enumerable.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client sent an invalid request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream rate limit was hit
    #[error("Rate limited")]
    RateLimited,

    /// An external dependency failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Stable error code
    pub code: String,
}

impl ApiError {
    /// Convert an application error, deciding detail exposure at the call site
    ///
    /// Client-input errors keep their message either way; the client sent the
    /// offending value. Upstream and internal messages are replaced with
    /// generic text unless `expose_details` is set.
    #[must_use]
    pub fn from_application(err: ApplicationError, expose_details: bool) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::Inference(msg) | ApplicationError::ExternalService(msg) => {
                if expose_details {
                    Self::Upstream(msg)
                } else {
                    Self::Upstream("upstream service error".to_string())
                }
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                if expose_details {
                    Self::Internal(msg)
                } else {
                    Self::Internal("an internal error occurred".to_string())
                }
            },
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::RateLimited => "rate_limited",
            Self::Upstream(_) => "upstream_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::BadRequest(msg) | Self::Upstream(msg) | Self::Internal(msg) => msg.clone(),
            Self::RateLimited => "Rate limit exceeded".to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
