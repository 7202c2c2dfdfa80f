//! Application services - Use case implementations

mod assistant_service;
mod transcription_service;

pub use assistant_service::{AssistantService, VoiceReply, DEFAULT_SYSTEM_PROMPT};
pub use transcription_service::{TranscriptionOutcome, TranscriptionService};
