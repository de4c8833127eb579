//! Order confirmation shown on the success page.

use crate::cart::{CartLine, CartPricing};
use crate::checkout::{District, PaymentMethod};
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a placed order.
///
/// Nothing is persisted; the confirmation lives only as long as the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Customer-facing reference.
    pub reference: OrderId,
    /// Bag contents at the moment of ordering.
    pub lines: Vec<CartLine>,
    /// Totals charged.
    pub pricing: CartPricing,
    pub payment: PaymentMethod,
    pub district: District,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
