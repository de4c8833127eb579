//! Cart and cart line types.

use crate::cart::{CartPricing, Customization, LinePricing};
use crate::catalog::{Product, Size};
use crate::checkout::ShippingPolicy;
use crate::config::CUSTOMIZATION_SURCHARGE;
use crate::error::CommerceError;
use crate::ids::{CartLineId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Identity of a line for merge-vs-append decisions.
///
/// Two adds with the same product, size, and customization (or both
/// without one) land on the same line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Size,
    pub customization: Option<Customization>,
}

/// Outcome of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity reached zero and the line was removed.
    Removed,
    /// No line with that ID.
    NotFound,
}

/// The shopping bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in insertion order.
    lines: Vec<CartLine>,
    /// Sequence for the next line ID.
    next_line: u64,
    /// Per-unit surcharge applied to customized lines.
    surcharge: Money,
}

impl Cart {
    /// Create an empty cart with the standard customization surcharge.
    pub fn new() -> Self {
        Self::with_surcharge(CUSTOMIZATION_SURCHARGE)
    }

    /// Create an empty cart with a custom surcharge.
    pub fn with_surcharge(surcharge: Money) -> Self {
        Self {
            lines: Vec::new(),
            next_line: 1,
            surcharge,
        }
    }

    /// Add one unit.
    ///
    /// Increments an existing line with the same key, otherwise appends a
    /// new line with quantity 1. Returns the ID of the affected line.
    pub fn add(
        &mut self,
        product: &Product,
        size: Size,
        customization: Option<Customization>,
    ) -> CartLineId {
        let key = LineKey {
            product_id: product.id.clone(),
            size,
            customization,
        };

        if let Some(existing) = self.lines.iter_mut().find(|l| l.key() == key) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.id.clone();
        }

        let id = CartLineId::sequence(self.next_line);
        self.next_line += 1;

        let surcharge = if key.customization.is_some() {
            self.surcharge
        } else {
            Money::zero()
        };

        self.lines.push(CartLine {
            id: id.clone(),
            product_id: key.product_id,
            product_name: product.name.clone(),
            image: product.image.clone(),
            size,
            quantity: 1,
            base_price: product.price,
            surcharge,
            customization: key.customization,
        });
        id
    }

    /// Remove a line. Returns false if it was not in the cart.
    pub fn remove(&mut self, line_id: &CartLineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        self.lines.len() < len_before
    }

    /// Adjust a line's quantity by `delta`.
    ///
    /// A result of zero or less removes the line.
    pub fn update_quantity(&mut self, line_id: &CartLineId, delta: i64) -> QuantityUpdate {
        let Some(index) = self.lines.iter().position(|l| &l.id == line_id) else {
            return QuantityUpdate::NotFound;
        };

        let next = i64::from(self.lines[index].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(index);
            return QuantityUpdate::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[index].quantity = quantity;
        QuantityUpdate::Updated(quantity)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by ID.
    pub fn get(&self, line_id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Full pricing breakdown with overflow checking.
    pub fn calculate_pricing(
        &self,
        shipping: &ShippingPolicy,
    ) -> Result<CartPricing, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LinePricing {
                    line_id: line.id.clone(),
                    unit_price: line.checked_unit_price().ok_or(CommerceError::Overflow)?,
                    quantity: line.quantity,
                    total: line.checked_total().ok_or(CommerceError::Overflow)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal =
            Money::try_sum(lines.iter().map(|l| l.total)).ok_or(CommerceError::Overflow)?;
        let shipping_cost = shipping.cost_for(subtotal);
        let grand_total = subtotal
            .checked_add(shipping_cost)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            shipping: shipping_cost,
            grand_total,
            lines,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// One purchasable line in the bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: CartLineId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Product image (denormalized for display).
    pub image: String,
    /// Selected size.
    pub size: Size,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Catalog price per unit.
    pub base_price: Money,
    /// Printing surcharge per unit; zero when not customized.
    pub surcharge: Money,
    /// Printed name/number, if any.
    pub customization: Option<Customization>,
}

impl CartLine {
    /// The merge key for this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size,
            customization: self.customization.clone(),
        }
    }

    pub fn is_customized(&self) -> bool {
        self.customization.is_some()
    }

    /// Effective price per unit, surcharge included. Saturates on overflow.
    pub fn unit_price(&self) -> Money {
        self.base_price + self.surcharge
    }

    /// `unit_price * quantity`.
    pub fn total(&self) -> Money {
        self.unit_price() * self.quantity
    }

    fn checked_unit_price(&self) -> Option<Money> {
        self.base_price.checked_add(self.surcharge)
    }

    fn checked_total(&self) -> Option<Money> {
        self.checked_unit_price()?.checked_mul(self.quantity)
    }
}
