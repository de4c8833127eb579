//! Storefront domain types and the shopping store for Premium Kits.
//!
//! This crate holds everything the storefront knows about kits and the
//! shopper's session:
//!
//! - **Catalog**: Products, leagues, sizes, image fallbacks
//! - **Cart**: Bag lines, name/number customization, pricing
//! - **Checkout**: Two-step flow, delivery form, shipping, confirmation
//! - **Search**: Shop listing filter
//! - **Store**: Navigation, bag, wishlist, and category in one state owner
//!
//! # Example
//!
//! ```rust
//! use kit_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let mut store = Store::new();
//!
//! let kit = catalog.get(&ProductId::new("arsenal-home-25")).unwrap();
//! store.navigate_to(Navigation::Product(kit.clone()));
//!
//! let custom = Customization::new("Saka", "7", FontStyle::Classic).unwrap();
//! store.add_to_cart(kit, Size::M, Some(custom));
//! store.add_to_cart(kit, Size::M, None);
//!
//! assert_eq!(store.cart_count(), 2);
//! assert_eq!(store.cart_total(), Money::new(1750 * 2 + 800));
//! assert_eq!(store.shipping_cost(), Money::zero());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod config;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod search;
pub mod store;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, League, Product, Size, StockStatus};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, Customization, FontStyle, QuantityUpdate};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, CheckoutStep, District, OrderConfirmation, PaymentMethod, ShippingPolicy,
    };

    // Search
    pub use crate::search::ShopFilter;

    // Store
    pub use crate::store::{Breadcrumb, Navigation, Page, Store, Wishlist};
}
