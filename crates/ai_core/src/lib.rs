//! AI Core - Chat-completion engine
//!
//! Provides the inference abstraction and its OpenAI implementation.
//! The OpenAI client talks to the `/chat/completions` endpoint and returns
//! the first choice's message content.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAIInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
