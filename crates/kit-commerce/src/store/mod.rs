//! Session state: navigation, bag, wishlist, and category.

pub mod breadcrumb;
mod navigation;
mod store;
mod wishlist;

pub use breadcrumb::Breadcrumb;
pub use navigation::{Navigation, Page};
pub use store::Store;
pub use wishlist::Wishlist;
