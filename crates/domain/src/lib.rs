//! Domain layer for VoiceRelay
//!
//! Contains core entities and domain errors for the voice-assistant backend.
//! This layer has no I/O dependencies and defines the ubiquitous language.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::DomainError;
