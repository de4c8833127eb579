//! Breadcrumb trails.

use crate::catalog::{CategoryFilter, Product};
use crate::checkout::CheckoutStep;
use crate::store::Page;
use serde::Serialize;

/// Longest trail shown before the middle collapses into an ellipsis.
pub const MAX_VISIBLE_CRUMBS: usize = 4;

/// One step in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Breadcrumb {
    /// A label, optionally linking to a page.
    Link {
        label: String,
        target: Option<Page>,
    },
    /// Stands in for collapsed crumbs.
    Ellipsis,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, target: Page) -> Self {
        Breadcrumb::Link {
            label: label.into(),
            target: Some(target),
        }
    }

    /// The current location; not clickable.
    pub fn here(label: impl Into<String>) -> Self {
        Breadcrumb::Link {
            label: label.into(),
            target: None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Breadcrumb::Link { label, .. } => label,
            Breadcrumb::Ellipsis => "...",
        }
    }

    pub fn target(&self) -> Option<Page> {
        match self {
            Breadcrumb::Link { target, .. } => *target,
            Breadcrumb::Ellipsis => None,
        }
    }
}

/// Trail for the shop listing.
pub fn shop_trail(category: CategoryFilter) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::link("Shop All", Page::Shop)];
    if let CategoryFilter::League(league) = category {
        trail.push(Breadcrumb::here(league.name()));
    }
    trail
}

/// Trail for a product detail page.
pub fn product_trail(product: &Product) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Shop", Page::Shop),
        Breadcrumb::link(product.league.name(), Page::Shop),
        Breadcrumb::here(product.name.clone()),
    ]
}

/// Trail for the bag and checkout steps.
pub fn bag_trail(step: CheckoutStep) -> Vec<Breadcrumb> {
    match step {
        CheckoutStep::Bag => vec![Breadcrumb::link("Shopping Bag", Page::Cart)],
        CheckoutStep::Details => vec![
            Breadcrumb::link("Bag", Page::Cart),
            Breadcrumb::here("Checkout"),
        ],
    }
}

/// Collapse long trails to first, ellipsis, and the last two crumbs.
pub fn collapse(items: Vec<Breadcrumb>, max: usize) -> Vec<Breadcrumb> {
    if items.len() <= max || items.len() < 3 {
        return items;
    }
    let len = items.len();
    let mut collapsed = Vec::with_capacity(4);
    collapsed.push(items[0].clone());
    collapsed.push(Breadcrumb::Ellipsis);
    collapsed.extend(items[len - 2..].iter().cloned());
    collapsed
}

/// The crumb a mobile "Back to ..." button returns to.
pub fn back_link(items: &[Breadcrumb]) -> Option<&Breadcrumb> {
    if items.len() < 2 {
        return None;
    }
    items.get(items.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::League;
    use crate::money::Money;

    fn crumbs(n: usize) -> Vec<Breadcrumb> {
        (0..n).map(|i| Breadcrumb::here(format!("c{}", i))).collect()
    }

    #[test]
    fn test_short_trail_untouched() {
        let trail = crumbs(4);
        assert_eq!(collapse(trail.clone(), MAX_VISIBLE_CRUMBS), trail);
    }

    #[test]
    fn test_long_trail_collapses() {
        let collapsed = collapse(crumbs(6), MAX_VISIBLE_CRUMBS);
        let labels: Vec<_> = collapsed.iter().map(Breadcrumb::label).collect();
        assert_eq!(labels, vec!["c0", "...", "c4", "c5"]);
    }

    #[test]
    fn test_shop_trail() {
        assert_eq!(shop_trail(CategoryFilter::All).len(), 1);
        let trail = shop_trail(League::SerieA.into());
        assert_eq!(trail[1].label(), "Serie A");
        assert_eq!(trail[1].target(), None);
    }

    #[test]
    fn test_product_trail() {
        let product = Product::new(
            "x",
            "Juventus Home 25/26",
            "Juventus",
            League::SerieA,
            "2025/26",
            Money::new(1700),
            "x.jpg",
        );
        let trail = product_trail(&product);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].target(), Some(Page::Shop));
        assert_eq!(trail[2].label(), "Juventus Home 25/26");
    }

    #[test]
    fn test_back_link() {
        let trail = bag_trail(CheckoutStep::Details);
        assert_eq!(back_link(&trail).map(Breadcrumb::label), Some("Bag"));
        assert_eq!(back_link(&bag_trail(CheckoutStep::Bag)), None);
    }
}
