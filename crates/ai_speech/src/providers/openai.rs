//! OpenAI speech provider
//!
//! Implements `SpeechToText` using Whisper and `TextToSpeech` using the
//! OpenAI TTS endpoint. Audio format acceptance is delegated to the
//! service; uploads are forwarded with whatever filename and MIME type the
//! client supplied.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::{AudioInput, SynthesizedAudio, Transcription};

/// Voices offered by the OpenAI TTS models
pub const OPENAI_VOICES: [&str; 6] = ["alloy", "echo", "fable", "onyx", "nova", "shimmer"];

/// OpenAI TTS rejects inputs beyond this many characters
const TTS_MAX_INPUT_CHARS: usize = 4096;

/// OpenAI speech provider implementing both STT and TTS
#[derive(Debug, Clone)]
pub struct OpenAISpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl OpenAISpeechProvider {
    /// Create a new OpenAI speech provider
    ///
    /// A missing API key is accepted here; requests will fail with
    /// `SpeechError::Unauthorized` at call time.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        if config.api_key.is_none() {
            warn!("No API key configured, speech requests will be rejected upstream");
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.base_url)
    }

    fn tts_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url)
    }

    /// Map a transport-level failure, reporting the configured timeout
    fn request_error(&self, err: reqwest::Error) -> SpeechError {
        if err.is_timeout() {
            SpeechError::Timeout(self.config.timeout_ms)
        } else if err.is_connect() {
            SpeechError::ConnectionFailed(err.to_string())
        } else {
            SpeechError::RequestFailed(err.to_string())
        }
    }

    fn map_stt_error(&self, status: reqwest::StatusCode, body: &str) -> SpeechError {
        if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
            return match (status.as_u16(), api_error.error.code.as_deref()) {
                (429, _) | (_, Some("rate_limit_exceeded")) => SpeechError::RateLimited,
                (401, _) => SpeechError::Unauthorized(api_error.error.message),
                (_, Some("model_not_found")) => {
                    SpeechError::ModelNotAvailable(self.config.stt_model.clone())
                },
                _ => SpeechError::TranscriptionFailed(api_error.error.message),
            };
        }

        SpeechError::TranscriptionFailed(format!("HTTP {status}: {body}"))
    }

    fn map_tts_error(&self, status: reqwest::StatusCode, body: &str, voice: &str) -> SpeechError {
        if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
            return match (status.as_u16(), api_error.error.code.as_deref()) {
                (429, _) | (_, Some("rate_limit_exceeded")) => SpeechError::RateLimited,
                (401, _) => SpeechError::Unauthorized(api_error.error.message),
                (_, Some("model_not_found")) => {
                    SpeechError::ModelNotAvailable(self.config.tts_model.clone())
                },
                (_, Some("invalid_voice")) => SpeechError::VoiceNotFound(voice.to_string()),
                _ => SpeechError::SynthesisFailed(api_error.error.message),
            };
        }

        SpeechError::SynthesisFailed(format!("HTTP {status}: {body}"))
    }

    async fn probe_models_endpoint(&self) -> bool {
        let models_url = format!("{}/models", self.config.base_url);

        match self
            .client
            .get(&models_url)
            .bearer_auth(self.api_key())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Speech service availability check failed: {}", e);
                false
            },
        }
    }
}

/// Whisper transcription response
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f32>,
}

/// OpenAI API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl SpeechToText for OpenAISpeechProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.data.len()))]
    async fn transcribe(&self, audio: AudioInput) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio with Whisper");

        if audio.data.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        let filename = audio.filename_or_default().to_string();
        let mime_type = audio.mime_type_or_default().to_string();

        let file_part = Part::bytes(audio.data)
            .file_name(filename)
            .mime_str(&mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.stt_model.clone());

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Transcription request failed");
            return Err(self.map_stt_error(status, &error_body));
        }

        let whisper_response: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            text_len = whisper_response.text.len(),
            language = ?whisper_response.language,
            "Transcription complete"
        );

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let duration_ms = whisper_response.duration.map(|d| (d * 1000.0) as u64);

        Ok(Transcription {
            text: whisper_response.text,
            language: whisper_response.language,
            duration_ms,
        })
    }

    async fn is_available(&self) -> bool {
        self.probe_models_endpoint().await
    }
}

#[async_trait]
impl TextToSpeech for OpenAISpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<SynthesizedAudio, SpeechError> {
        debug!("Synthesizing speech with OpenAI TTS");

        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        // The service limit counts characters, not bytes.
        let char_count = text.chars().count();
        if char_count > TTS_MAX_INPUT_CHARS {
            return Err(SpeechError::SynthesisFailed(format!(
                "Text too long: {char_count} characters exceeds {TTS_MAX_INPUT_CHARS} limit"
            )));
        }

        let voice = voice.unwrap_or(&self.config.default_voice);

        let request = TtsRequest {
            model: &self.config.tts_model,
            input: text,
            voice,
            response_format: &self.config.response_format,
            speed: if (self.config.speed - 1.0).abs() < f32::EPSILON {
                None
            } else {
                Some(self.config.speed)
            },
        };

        let response = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Synthesis request failed");
            return Err(self.map_tts_error(status, &error_body, voice));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(SynthesizedAudio::new(
            audio_bytes.to_vec(),
            self.config.response_mime_type(),
        ))
    }

    fn available_voices(&self) -> Vec<String> {
        OPENAI_VOICES.iter().map(ToString::to_string).collect()
    }
}
