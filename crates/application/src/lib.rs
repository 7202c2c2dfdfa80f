//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions and the two services the HTTP layer drives:
//! transcription (cache-first) and assistant chat with speech synthesis.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
