//! Liked products.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A set of product IDs, kept in the order they were liked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the ID if absent, remove it if present.
    ///
    /// Returns true when the product is wishlisted afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if let Some(index) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Resolve liked IDs against a catalog. Unknown IDs are skipped.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.ids.iter().filter_map(|id| catalog.find(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new("brazil-home-24");

        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert!(!wishlist.toggle(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut wishlist = Wishlist::new();
        let a = ProductId::new("a");
        let b = ProductId::new("b");
        let c = ProductId::new("c");
        wishlist.toggle(&a);
        wishlist.toggle(&b);
        wishlist.toggle(&c);
        wishlist.toggle(&b);
        assert_eq!(wishlist.ids(), &[a, c]);
    }

    #[test]
    fn test_products_skips_unknown_ids() {
        let catalog = Catalog::builtin();
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&ProductId::new("portugal-home-24"));
        wishlist.toggle(&ProductId::new("retired-kit"));
        wishlist.toggle(&ProductId::new("arsenal-home-25"));

        let names: Vec<_> = wishlist
            .products(catalog)
            .into_iter()
            .map(|p| p.team.as_str())
            .collect();
        assert_eq!(names, vec!["Portugal", "Arsenal"]);
    }
}
