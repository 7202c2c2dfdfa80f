//! Shared application state

use std::sync::Arc;

use application::error::ApplicationError;
use application::services::{AssistantService, TranscriptionService};

use crate::error::ApiError;

/// Shared state for all request handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chat with spoken replies
    pub assistant_service: Arc<AssistantService>,
    /// Cache-first transcription
    pub transcription_service: Arc<TranscriptionService>,
    /// Whether error responses may carry upstream/internal details
    pub expose_error_details: bool,
}

impl AppState {
    /// Render an application error for this deployment's exposure policy
    #[must_use]
    pub fn api_error(&self, err: ApplicationError) -> ApiError {
        ApiError::from_application(err, self.expose_error_details)
    }
}
