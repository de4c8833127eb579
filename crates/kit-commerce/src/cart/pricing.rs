//! Cart pricing calculations.

use crate::ids::CartLineId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost for this subtotal.
    pub shipping: Money,
    /// subtotal + shipping.
    pub grand_total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Whether shipping is free at this subtotal.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Label for the shipping row: "FREE" or the amount.
    pub fn shipping_label(&self) -> String {
        if self.has_free_shipping() {
            "FREE".to_string()
        } else {
            self.shipping.display()
        }
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub line_id: CartLineId,
    /// Unit price including any printing surcharge.
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price * quantity.
    pub total: Money,
}
