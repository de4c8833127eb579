//! Shop search module.

mod filter;

pub use filter::ShopFilter;
