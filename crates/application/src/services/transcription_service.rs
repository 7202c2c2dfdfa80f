//! Transcription service - Cache-first speech-to-text

use std::{fmt, sync::Arc};

use domain::AudioUpload;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{SpeechPort, TranscriptCache},
};

/// Outcome of a transcription request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionOutcome {
    /// Transcribed text
    pub text: String,
    /// Whether the result was served from the cache
    pub cached: bool,
}

/// Service for transcribing uploaded audio
///
/// Byte-identical uploads are served from the transcript cache without
/// touching the external service. Failed external calls leave the cache
/// untouched.
pub struct TranscriptionService {
    speech: Arc<dyn SpeechPort>,
    cache: Arc<dyn TranscriptCache>,
}

impl fmt::Debug for TranscriptionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionService")
            .field("cache_stats", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

impl TranscriptionService {
    /// Create a new transcription service
    pub fn new(speech: Arc<dyn SpeechPort>, cache: Arc<dyn TranscriptCache>) -> Self {
        Self { speech, cache }
    }

    /// Transcribe an uploaded recording
    #[instrument(skip(self, upload), fields(
        audio_size = upload.size_bytes(),
        content_type = ?upload.content_type
    ))]
    pub async fn transcribe(
        &self,
        upload: AudioUpload,
    ) -> Result<TranscriptionOutcome, ApplicationError> {
        if let Some(text) = self.cache.get(&upload.data).await {
            debug!(text_len = text.len(), "Transcript served from cache");
            return Ok(TranscriptionOutcome { text, cached: true });
        }

        let audio = upload.data.clone();
        let result = match self.speech.transcribe(upload).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Transcription failed");
                return Err(e);
            },
        };

        self.cache.insert(&audio, &result.text).await;

        debug!(
            text_len = result.text.len(),
            language = ?result.detected_language,
            "Transcription complete"
        );

        Ok(TranscriptionOutcome {
            text: result.text,
            cached: false,
        })
    }

    /// Current cache statistics
    pub fn cache_stats(&self) -> crate::ports::CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockSpeechPort, MockTranscriptCache, TranscriptionResult};

    fn upload(bytes: &[u8]) -> AudioUpload {
        AudioUpload::new(
            bytes.to_vec(),
            Some("clip.webm".to_string()),
            Some("audio/webm".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn cache_hit_skips_external_call() {
        let mut speech = MockSpeechPort::new();
        speech.expect_transcribe().times(0);

        let mut cache = MockTranscriptCache::new();
        cache
            .expect_get()
            .returning(|_| Some("cached transcript".to_string()));

        let service = TranscriptionService::new(Arc::new(speech), Arc::new(cache));
        let outcome = service.transcribe(upload(b"same bytes")).await.unwrap();

        assert!(outcome.cached);
        assert_eq!(outcome.text, "cached transcript");
    }

    #[tokio::test]
    async fn cache_miss_calls_service_and_stores() {
        let mut speech = MockSpeechPort::new();
        speech.expect_transcribe().times(1).returning(|_| {
            Ok(TranscriptionResult {
                text: "hello world".to_string(),
                detected_language: Some("en".to_string()),
                duration_ms: Some(1200),
            })
        });

        let mut cache = MockTranscriptCache::new();
        cache.expect_get().returning(|_| None);
        cache
            .expect_insert()
            .times(1)
            .withf(|audio, text| audio == b"new bytes" && text == "hello world")
            .returning(|_, _| ());

        let service = TranscriptionService::new(Arc::new(speech), Arc::new(cache));
        let outcome = service.transcribe(upload(b"new bytes")).await.unwrap();

        assert!(!outcome.cached);
        assert_eq!(outcome.text, "hello world");
    }

    #[tokio::test]
    async fn failed_call_does_not_write_cache() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_transcribe()
            .times(1)
            .returning(|_| Err(ApplicationError::ExternalService("whisper down".to_string())));

        let mut cache = MockTranscriptCache::new();
        cache.expect_get().returning(|_| None);
        cache.expect_insert().times(0);

        let service = TranscriptionService::new(Arc::new(speech), Arc::new(cache));
        let err = service.transcribe(upload(b"bytes")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
