//! Two-step bag/checkout progress.

use serde::{Deserialize, Serialize};

/// Steps shown in the bag page's progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Reviewing bag contents.
    #[default]
    Bag,
    /// Entering shipping and payment details.
    Details,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Bag => "bag",
            CheckoutStep::Details => "checkout",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Bag => "Bag",
            CheckoutStep::Details => "Checkout",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Bag => 1,
            CheckoutStep::Details => 2,
        }
    }

    /// Proceed to checkout.
    pub fn advance(self) -> Self {
        CheckoutStep::Details
    }

    /// "Edit bag".
    pub fn back(self) -> Self {
        CheckoutStep::Bag
    }

    /// Whether `step` is behind this one and shows as completed.
    pub fn has_completed(&self, step: CheckoutStep) -> bool {
        step.number() < self.number()
    }
}
