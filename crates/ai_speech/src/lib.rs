//! AI Speech - Speech-to-Text and Text-to-Speech abstractions
//!
//! Provides traits and the OpenAI implementation for speech processing:
//! - `SpeechToText` - Transcribe audio to text (Whisper)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! Audio formats are deliberately not validated locally. Uploads carry the
//! client's filename and content type opaquely; the external service decides
//! what it accepts.

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::openai::OpenAISpeechProvider;
pub use types::{AudioInput, SynthesizedAudio, Transcription};
