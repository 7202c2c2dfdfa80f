//! Port traits for speech processing

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioInput, SynthesizedAudio, Transcription};

/// Speech-to-text conversion
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    async fn transcribe(&self, audio: AudioInput) -> Result<Transcription, SpeechError>;

    /// Check whether the service is reachable
    async fn is_available(&self) -> bool;
}

/// Text-to-speech synthesis
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech from text
    ///
    /// When `voice` is `None` the provider's configured default voice is used.
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedAudio, SpeechError>;

    /// Voices supported by the provider
    fn available_voices(&self) -> Vec<String>;
}
