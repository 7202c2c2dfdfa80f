//! Transcript cache configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the in-memory transcript cache
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached transcripts
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    /// Time-to-live for entries in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Time-to-idle before eviction in seconds (0 = disabled)
    #[serde(default = "default_tti_secs")]
    pub tti_secs: u64,
}

const fn default_max_entries() -> u64 {
    1024
}

const fn default_ttl_secs() -> u64 {
    3600 // 1 hour
}

const fn default_tti_secs() -> u64 {
    1800 // 30 minutes
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
            tti_secs: default_tti_secs(),
        }
    }
}

impl CacheConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0".to_string());
        }
        if self.ttl_secs == 0 {
            return Err("Cache ttl_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
