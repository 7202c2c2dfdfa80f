//! Infrastructure layer for VoiceRelay
//!
//! Concrete implementations of the application ports plus configuration:
//! - `adapters`: bridge the AI client crates onto the application ports
//! - `cache`: bounded in-memory transcript cache
//! - `config`: layered configuration loading (file, environment)

pub mod adapters;
pub mod cache;
pub mod config;

pub use adapters::{OpenAIInferenceAdapter, OpenAISpeechAdapter};
pub use cache::MokaTranscriptCache;
pub use config::{AppConfig, CacheConfig, Environment, ServerConfig};
