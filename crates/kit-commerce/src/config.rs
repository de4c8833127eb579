//! Store configuration.
//!
//! Every field has a default matching the live storefront, so an empty
//! `[store]` table is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::checkout::ShippingPolicy;
use crate::error::CommerceError;
use crate::money::Money;

/// Surcharge added to the unit price of a customized line.
pub const CUSTOMIZATION_SURCHARGE: Money = Money::new(800);

/// Default upper bound of the shop price filter.
pub const DEFAULT_MAX_PRICE: Money = Money::new(3000);

/// Number of products shown in the home page's featured strip.
pub const DEFAULT_FEATURED_COUNT: usize = 4;

/// Largest amount accepted for any configured price.
pub const MAX_CONFIG_AMOUNT: Money = Money::new(1_000_000);

/// Pricing and listing knobs for the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Surcharge per unit for name/number printing.
    #[serde(default = "default_surcharge")]
    pub customization_surcharge: Money,

    /// Shipping rates.
    #[serde(default)]
    pub shipping: ShippingPolicy,

    /// Shop listing defaults.
    #[serde(default)]
    pub shop: ShopConfig,
}

fn default_surcharge() -> Money {
    CUSTOMIZATION_SURCHARGE
}

impl StoreConfig {
    /// Check every amount is within `0..=MAX_CONFIG_AMOUNT`, with a
    /// positive shop price ceiling.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let amounts = [
            ("customization_surcharge", self.customization_surcharge),
            ("shipping.flat_rate", self.shipping.flat_rate),
            ("shipping.free_threshold", self.shipping.free_threshold),
            ("shop.max_price", self.shop.max_price),
        ];
        for (field, amount) in amounts {
            if amount.amount() < 0 || amount > MAX_CONFIG_AMOUNT {
                return Err(CommerceError::InvalidConfig(format!(
                    "{} must be between 0 and {}",
                    field,
                    MAX_CONFIG_AMOUNT.amount()
                )));
            }
        }
        if !self.shop.max_price.is_positive() {
            return Err(CommerceError::InvalidConfig(
                "shop.max_price must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            customization_surcharge: CUSTOMIZATION_SURCHARGE,
            shipping: ShippingPolicy::default(),
            shop: ShopConfig::default(),
        }
    }
}

/// Shop listing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Price ceiling applied to the shop listing.
    #[serde(default = "default_max_price")]
    pub max_price: Money,

    /// How many products the home page features.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_max_price() -> Money {
    DEFAULT_MAX_PRICE
}

fn default_featured_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            max_price: DEFAULT_MAX_PRICE,
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.customization_surcharge, Money::new(800));
        assert_eq!(config.shipping.flat_rate, Money::new(100));
        assert_eq!(config.shipping.free_threshold, Money::new(2000));
        assert_eq!(config.shop.max_price, Money::new(3000));
    }

    #[test]
    fn test_partial_override() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"shipping": {"flat_rate": 150}}"#).unwrap();
        assert_eq!(config.shipping.flat_rate, Money::new(150));
        assert_eq!(config.shipping.free_threshold, Money::new(2000));
        assert_eq!(config.customization_surcharge, Money::new(800));
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(StoreConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_out_of_range_amounts_rejected() {
        let mut config = StoreConfig::default();
        config.customization_surcharge = Money::new(i64::MAX - 10);
        assert!(matches!(
            config.validate(),
            Err(CommerceError::InvalidConfig(msg)) if msg.starts_with("customization_surcharge")
        ));

        let mut config = StoreConfig::default();
        config.shipping.flat_rate = Money::new(-1);
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.shop.max_price = Money::zero();
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.customization_surcharge = Money::zero();
        assert!(config.validate().is_ok());
    }
}
