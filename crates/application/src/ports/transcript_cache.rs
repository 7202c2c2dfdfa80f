//! Transcript cache port
//!
//! Caches transcripts by audio content so byte-identical uploads skip the
//! external transcription call. Keying (content hashing), capacity bounds and
//! eviction are implementation concerns of the adapter.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Approximate number of entries currently cached
    pub entries: u64,
}

/// Port for the transcript cache
///
/// Implementations must be safe to share across concurrent requests. Two
/// requests missing on the same key may both perform the external call; both
/// then store the same idempotent value, which is benign.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptCache: Send + Sync {
    /// Look up a transcript for the given audio content
    async fn get(&self, audio: &[u8]) -> Option<String>;

    /// Store a transcript for the given audio content
    async fn insert(&self, audio: &[u8], transcript: &str);

    /// Get cache statistics (hits, misses, entry count)
    fn stats(&self) -> CacheStats;
}
