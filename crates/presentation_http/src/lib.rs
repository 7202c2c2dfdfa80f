//! VoiceRelay HTTP presentation layer
//!
//! Thin HTTP surface over the application services: a liveness endpoint,
//! audio transcription and chat with a spoken reply.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::AppState;
