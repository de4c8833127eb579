//! Shop listing filter.

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::config::DEFAULT_MAX_PRICE;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Criteria for the shop grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopFilter {
    /// League chip selection.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Budget slider; products priced above this are hidden.
    #[serde(default = "default_max_price")]
    pub max_price: Money,
    /// Free-text search over name, team, and league.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

fn default_max_price() -> Money {
    DEFAULT_MAX_PRICE
}

impl ShopFilter {
    /// Create a filter for a category with the default budget.
    pub fn new(category: CategoryFilter) -> Self {
        Self {
            category,
            max_price: DEFAULT_MAX_PRICE,
            query: None,
        }
    }

    pub fn with_max_price(mut self, max_price: Money) -> Self {
        self.max_price = max_price;
        self
    }

    /// Set the search text. Blank text clears the search.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }

    /// Check a single product.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.league) {
            return false;
        }
        if product.price > self.max_price {
            return false;
        }
        match &self.query {
            Some(query) => {
                let needle = query.trim().to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.team.to_lowercase().contains(&needle)
                    || product.league.name().to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    /// Matching products in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}

impl Default for ShopFilter {
    fn default() -> Self {
        Self::new(CategoryFilter::All)
    }
}
