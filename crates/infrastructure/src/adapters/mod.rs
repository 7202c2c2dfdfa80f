//! Adapters bridging the AI client crates onto the application ports

mod inference_adapter;
mod speech_adapter;

pub use inference_adapter::OpenAIInferenceAdapter;
pub use speech_adapter::OpenAISpeechAdapter;
