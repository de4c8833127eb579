//! Checkout module.
//!
//! Contains the checkout steps, form, shipping rates, and order confirmation.

mod flow;
mod form;
mod order;
mod shipping;

pub use flow::CheckoutStep;
pub use form::{CheckoutForm, District, PaymentMethod};
pub use order::OrderConfirmation;
pub use shipping::{ShippingPolicy, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD};
