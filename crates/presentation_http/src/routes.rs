//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// `max_body_bytes` bounds uploads on the transcription endpoint.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Liveness and health
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health_check))
        .route("/ready", get(handlers::status::readiness_check))
        // Voice assistant API
        .route("/transcribe", post(handlers::transcribe::transcribe))
        .route("/chat", post(handlers::chat::chat))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
