//! Moka-backed transcript cache
//!
//! Bounded, thread-safe in-memory cache with TTL and TTI eviction. Keys are
//! content hashes of the uploaded audio; values are the transcripts.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use application::ports::{CacheStats, TranscriptCache};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::config::CacheConfig;

use super::transcript_cache_key;

/// Bounded in-memory transcript cache
pub struct MokaTranscriptCache {
    cache: Cache<String, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for MokaTranscriptCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaTranscriptCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl MokaTranscriptCache {
    /// Create a cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a cache with custom bounds
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        let mut builder = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(Duration::from_secs(config.ttl_secs));

        if config.tti_secs > 0 {
            builder = builder.time_to_idle(Duration::from_secs(config.tti_secs));
        }

        Self {
            cache: builder.build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl Default for MokaTranscriptCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptCache for MokaTranscriptCache {
    async fn get(&self, audio: &[u8]) -> Option<String> {
        let key = transcript_cache_key(audio);

        if let Some(transcript) = self.cache.get(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Transcript cache hit");
            Some(transcript)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Transcript cache miss");
            None
        }
    }

    async fn insert(&self, audio: &[u8], transcript: &str) {
        let key = transcript_cache_key(audio);
        self.cache.insert(key, transcript.to_string()).await;
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}
