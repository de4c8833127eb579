//! Pages and navigation targets.

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Shop,
    Product,
    Cart,
    Wishlist,
    CheckoutSuccess,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Shop,
        Page::Product,
        Page::Cart,
        Page::Wishlist,
        Page::CheckoutSuccess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Shop => "shop",
            Page::Product => "product",
            Page::Cart => "cart",
            Page::Wishlist => "wishlist",
            Page::CheckoutSuccess => "checkout-success",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownPage(s.to_string()))
    }
}

/// Where to go next.
///
/// The product page is the only destination that needs a payload, so it
/// is impossible to land there without a product.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Home,
    Shop,
    Product(Product),
    Cart,
    Wishlist,
    CheckoutSuccess,
}

impl Navigation {
    /// The page this navigation lands on.
    pub fn page(&self) -> Page {
        match self {
            Navigation::Home => Page::Home,
            Navigation::Shop => Page::Shop,
            Navigation::Product(_) => Page::Product,
            Navigation::Cart => Page::Cart,
            Navigation::Wishlist => Page::Wishlist,
            Navigation::CheckoutSuccess => Page::CheckoutSuccess,
        }
    }

    /// Navigation to a payload-free page. Returns None for `Page::Product`.
    pub fn to_page(page: Page) -> Option<Self> {
        match page {
            Page::Home => Some(Navigation::Home),
            Page::Shop => Some(Navigation::Shop),
            Page::Product => None,
            Page::Cart => Some(Navigation::Cart),
            Page::Wishlist => Some(Navigation::Wishlist),
            Page::CheckoutSuccess => Some(Navigation::CheckoutSuccess),
        }
    }
}
