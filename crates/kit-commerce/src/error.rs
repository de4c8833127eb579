//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Store mutations themselves never fail; these cover the validation
/// boundaries around them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Unknown or empty size.
    #[error("Invalid size: {0:?}")]
    InvalidSize(String),

    /// Unknown font style.
    #[error("Invalid font style: {0:?}")]
    InvalidFont(String),

    /// Unknown league name.
    #[error("Unknown league: {0:?}")]
    UnknownLeague(String),

    /// Unknown page name.
    #[error("Unknown page: {0:?}")]
    UnknownPage(String),

    /// Customization name/number rejected.
    #[error("Invalid customization: {0}")]
    InvalidCustomization(String),

    /// Checkout attempted with nothing in the bag.
    #[error("Cannot check out an empty bag")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(&'static str),

    /// Store configuration value out of range.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
