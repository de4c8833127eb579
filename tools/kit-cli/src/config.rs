//! CLI configuration.

use anyhow::{Context, Result};
use kit_commerce::StoreConfig;
use kit_consultant::ConsultantConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pricing and listing settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Kit consultant settings.
    #[serde(default)]
    pub consultant: ConsultantConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            store: StoreConfig::default(),
            consultant: ConsultantConfig::default(),
        }
    }
}

impl KitConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; JSON when the path ends in `.json`, TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Generate a default kit.toml config file.
pub fn generate_default_config() -> String {
    r#"# Premium Kits CLI configuration

log_level = "warn"

[store]
# Per-unit charge for name/number printing
customization_surcharge = 800

[store.shipping]
flat_rate = 100
# Orders at or above this subtotal ship free
free_threshold = 2000

[store.shop]
max_price = 3000
featured_count = 4

[consultant]
model = "gemini-3-flash-preview"
# The API key is read from this environment variable
api_key_env = "GEMINI_API_KEY"
timeout_secs = 30
# base_url = "https://generativelanguage.googleapis.com"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_commerce::Money;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = KitConfig::parse("kit.toml", &generate_default_config()).unwrap();
        assert_eq!(config, KitConfig::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = KitConfig::parse("kit.toml", "").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.store.shipping.free_threshold, Money::new(2000));
    }

    #[test]
    fn test_json_config() {
        let config =
            KitConfig::parse("kit.json", r#"{"store": {"shop": {"max_price": 5000}}}"#).unwrap();
        assert_eq!(config.store.shop.max_price, Money::new(5000));
        assert_eq!(config.store.shop.featured_count, 4);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(KitConfig::parse("kit.toml", "[store\n").is_err());
    }
}
