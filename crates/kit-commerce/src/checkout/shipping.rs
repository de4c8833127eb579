//! Shipping rates.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat shipping charge below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Money = Money::new(100);

/// Subtotal at which shipping becomes free (inclusive).
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(2000);

/// Flat-rate shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Charged when the subtotal is under the threshold.
    #[serde(default = "default_flat_rate")]
    pub flat_rate: Money,
    /// Subtotals at or above this ship free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold: Money,
}

fn default_flat_rate() -> Money {
    FLAT_SHIPPING_RATE
}

fn default_free_threshold() -> Money {
    FREE_SHIPPING_THRESHOLD
}

impl ShippingPolicy {
    pub fn new(flat_rate: Money, free_threshold: Money) -> Self {
        Self {
            flat_rate,
            free_threshold,
        }
    }

    /// Whether `subtotal` qualifies for free shipping.
    pub fn is_free_for(&self, subtotal: Money) -> bool {
        subtotal >= self.free_threshold
    }

    /// Shipping cost for a cart subtotal.
    pub fn cost_for(&self, subtotal: Money) -> Money {
        if self.is_free_for(subtotal) {
            Money::zero()
        } else {
            self.flat_rate
        }
    }

    /// How much more the customer must spend to ship free.
    pub fn amount_until_free(&self, subtotal: Money) -> Money {
        self.free_threshold.saturating_sub_to_zero(subtotal)
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::new(FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD)
    }
}
