//! Configuration for the chat-completion engine

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// OpenAI API key
    ///
    /// Optional: a missing key does not prevent startup, requests simply
    /// fail with an authorization error from the service.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the API (for custom endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Temperature for sampling (service default when unset)
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate (service default when unset)
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo-0125".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            temperature: None,
            max_tokens: None,
        }
    }
}

impl InferenceConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        if let Some(temp) = self.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(format!("Temperature must be between 0.0 and 2.0, got {temp}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = InferenceConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.default_model, "gpt-3.5-turbo-0125");
        assert_eq!(config.timeout_ms, 60000);
        assert!(config.temperature.is_none());
        assert!(config.max_tokens.is_none());
    }

    #[test]
    fn default_config_is_valid_without_api_key() {
        // Missing credentials fail at request time, not at startup
        assert!(InferenceConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = InferenceConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let config = InferenceConfig {
            temperature: Some(3.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            api_key = "sk-test"
            base_url = "http://localhost:8080/v1"
            default_model = "gpt-4o-mini"
            timeout_ms = 30000
            temperature = 0.7
        "#;

        let config: InferenceConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.api_key, Some("sk-test".to_string()));
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.default_model, "gpt-4o-mini");
        assert_eq!(config.timeout_ms, 30000);
        assert!((config.temperature.unwrap() - 0.7).abs() < f32::EPSILON);
    }
}
