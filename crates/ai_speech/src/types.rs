//! Data types shared by the speech ports

use serde::{Deserialize, Serialize};

/// Audio handed to a speech-to-text provider
///
/// The filename and MIME type are forwarded to the provider verbatim when
/// present; no local format sniffing takes place.
#[derive(Debug, Clone)]
pub struct AudioInput {
    /// Raw audio bytes
    pub data: Vec<u8>,
    /// Original filename, if the client supplied one
    pub filename: Option<String>,
    /// MIME type, if the client supplied one
    pub mime_type: Option<String>,
}

impl AudioInput {
    /// Create an audio input from raw bytes
    #[must_use]
    pub const fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            filename: None,
            mime_type: None,
        }
    }

    /// Attach the client-supplied filename
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attach the client-supplied MIME type
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Filename to report upstream, with a generic fallback
    #[must_use]
    pub fn filename_or_default(&self) -> &str {
        self.filename.as_deref().unwrap_or("audio.webm")
    }

    /// MIME type to report upstream, with a generic fallback
    #[must_use]
    pub fn mime_type_or_default(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("application/octet-stream")
    }
}

/// Result of transcribing audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// The transcribed text
    pub text: String,
    /// Detected language, if the provider reports one
    #[serde(default)]
    pub language: Option<String>,
    /// Audio duration in milliseconds, if the provider reports one
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a transcription carrying only text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }
}

/// Result of synthesizing speech
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Encoded audio bytes
    pub data: Vec<u8>,
    /// MIME type of the encoded audio
    pub mime_type: String,
}

impl SynthesizedAudio {
    /// Create synthesized audio
    #[must_use]
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Size of the encoded audio in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_input_defaults() {
        let input = AudioInput::new(vec![1, 2, 3]);
        assert_eq!(input.filename_or_default(), "audio.webm");
        assert_eq!(input.mime_type_or_default(), "application/octet-stream");
    }

    #[test]
    fn audio_input_builder_overrides_defaults() {
        let input = AudioInput::new(vec![1])
            .with_filename("voice.mp3")
            .with_mime_type("audio/mpeg");
        assert_eq!(input.filename_or_default(), "voice.mp3");
        assert_eq!(input.mime_type_or_default(), "audio/mpeg");
    }

    #[test]
    fn transcription_new_carries_only_text() {
        let transcription = Transcription::new("hello world");
        assert_eq!(transcription.text, "hello world");
        assert!(transcription.language.is_none());
        assert!(transcription.duration_ms.is_none());
    }

    #[test]
    fn synthesized_audio_reports_size() {
        let audio = SynthesizedAudio::new(vec![0u8; 42], "audio/mpeg");
        assert_eq!(audio.size_bytes(), 42);
        assert_eq!(audio.mime_type, "audio/mpeg");
    }
}
