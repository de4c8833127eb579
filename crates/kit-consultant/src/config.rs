//! Consultant configuration.

use serde::{Deserialize, Serialize};

/// Production endpoint for the generation API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used by the storefront.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Persona given to the model with every question.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert football kit consultant for \
'Premium Kits Bangladesh'. You help fans find authentic jerseys. You have deep knowledge of \
football history, club aesthetics, and jersey technology (Player vs Fan editions). Be \
professional, enthusiastic, and helpful.";

/// Settings for talking to the generation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable to read the key from.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_system_instruction() -> String {
    SYSTEM_INSTRUCTION.to_string()
}

impl Default for ConsultantConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            system_instruction: default_system_instruction(),
        }
    }
}

impl ConsultantConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsultantConfig::default();
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.system_instruction.contains("Premium Kits Bangladesh"));
    }

    #[test]
    fn test_partial_deserialize() {
        let config: ConsultantConfig =
            serde_json::from_str(r#"{"model": "gemini-2.5-pro", "timeout_secs": 5}"#).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_api_key_missing_variable() {
        let config = ConsultantConfig {
            api_key_env: "KIT_CONSULTANT_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }
}
