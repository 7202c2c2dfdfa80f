//! Port definitions
//!
//! Interfaces implemented by infrastructure adapters.

mod inference_port;
mod speech_port;
mod transcript_cache;

pub use inference_port::{InferencePort, InferenceResult};
pub use speech_port::{SpeechPort, SynthesisResult, TranscriptionResult};
pub use transcript_cache::{CacheStats, TranscriptCache};

#[cfg(test)]
pub use inference_port::MockInferencePort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
#[cfg(test)]
pub use transcript_cache::MockTranscriptCache;
