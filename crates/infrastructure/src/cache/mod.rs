//! Transcript caching
//!
//! Byte-identical uploads map to the same cache key, so repeated
//! transcriptions of the same clip skip the external call.

mod moka_transcript_cache;

pub use moka_transcript_cache::MokaTranscriptCache;

/// Derive the cache key for an audio payload
///
/// Content-addressed: the key is a BLAKE3 hash of the raw bytes, so equal
/// payloads collide intentionally and unequal payloads effectively never do.
#[must_use]
pub fn transcript_cache_key(audio: &[u8]) -> String {
    format!("transcript:{}", blake3::hash(audio).to_hex())
}
