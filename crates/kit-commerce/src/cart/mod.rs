//! Shopping cart module.
//!
//! Contains the bag, its lines, customization, and pricing.

mod cart;
mod customization;
mod pricing;

pub use cart::{Cart, CartLine, LineKey, QuantityUpdate};
pub use customization::{Customization, FontStyle, MAX_NAME_LEN, MAX_NUMBER_DIGITS};
pub use pricing::{CartPricing, LinePricing};
