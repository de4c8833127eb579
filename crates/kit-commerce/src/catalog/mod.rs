//! Product catalog module.
//!
//! Contains the static catalog, products, leagues, and image fallbacks.

mod catalog;
mod league;
pub mod media;
mod product;

pub use catalog::Catalog;
pub use league::{CategoryFilter, League, ALL_CATEGORIES};
pub use product::{Product, Size, StockStatus, FALLBACK_GALLERY_LEN};
