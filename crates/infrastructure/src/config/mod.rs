//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `voicerelay.toml`
//! file, then `VOICERELAY_*` environment variables. The conventional
//! `OPENAI_API_KEY` variable is honored as a fallback for both the inference
//! and speech API keys.

mod cache;
mod server;

use std::fmt;

use ai_core::InferenceConfig;
use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use cache::CacheConfig;
pub use server::ServerConfig;

/// Application environment (development or production)
///
/// Controls how much error detail is exposed in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - verbose error details in responses
    #[default]
    Development,
    /// Production environment - generic error messages only
    Production,
}

impl Environment {
    /// Whether upstream error details may be included in HTTP responses
    #[must_use]
    pub const fn expose_error_details(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech processing configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Transcript cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional file and environment
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a source fails to parse or the
    /// merged result does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("voicerelay").required(false))
            // Override with environment variables (e.g., VOICERELAY_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("VOICERELAY")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;
        app_config.apply_api_key_fallback();
        Ok(app_config)
    }

    /// Fill missing API keys from the conventional `OPENAI_API_KEY` variable
    fn apply_api_key_fallback(&mut self) {
        if self.inference.api_key.is_some() && self.speech.api_key.is_some() {
            return;
        }

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if key.is_empty() {
                return;
            }
            if self.inference.api_key.is_none() {
                debug!("Using OPENAI_API_KEY for inference");
                self.inference.api_key = Some(key.clone());
            }
            if self.speech.api_key.is_none() {
                debug!("Using OPENAI_API_KEY for speech");
                self.speech.api_key = Some(key);
            }
        }
    }

    /// Validate the full configuration
    ///
    /// A missing API key is not an error; a warning is logged and upstream
    /// calls fail with an authorization error instead.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting found.
    pub fn validate(&self) -> Result<(), String> {
        self.inference.validate()?;
        self.speech.validate()?;
        self.cache.validate()?;

        if self.inference.api_key.is_none() || self.speech.api_key.is_none() {
            warn!("No OpenAI API key configured, upstream requests will be rejected");
        }

        Ok(())
    }
}
