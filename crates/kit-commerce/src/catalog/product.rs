//! Product types.

use crate::catalog::League;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many times the primary image is repeated when a product has no gallery.
pub const FALLBACK_GALLERY_LEN: usize = 4;

/// Availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Ships from stock.
    #[default]
    InStock,
    /// Can be ordered ahead of release.
    PreOrder,
    /// Not currently purchasable.
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::PreOrder => "pre-order",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A jersey in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Club or national team.
    pub team: String,
    /// League the team plays in.
    pub league: League,
    /// Season label, e.g. "2025/26".
    pub season: String,
    /// Current price.
    pub price: Money,
    /// Pre-sale price. Only present when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Primary image URL.
    pub image: String,
    /// Additional images, in display order. May be empty.
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Authentic player-spec jersey rather than fan edition.
    #[serde(default)]
    pub is_player_edition: bool,
    /// Availability.
    #[serde(default)]
    pub status: StockStatus,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Hex colour (no leading `#`) used for generated placeholder images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Product {
    /// Create an in-stock fan edition with no gallery.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        team: impl Into<String>,
        league: League,
        season: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: team.into(),
            league,
            season: season.into(),
            price,
            original_price: None,
            image: image.into(),
            gallery: Vec::new(),
            is_player_edition: false,
            status: StockStatus::InStock,
            rating: 0.0,
            reviews: 0,
            color: None,
        }
    }

    /// Mark as on sale from the given original price.
    ///
    /// Ignored unless `original` is above the current price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        if original > self.price {
            self.original_price = Some(original);
        }
        self
    }

    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = gallery;
        self
    }

    pub fn player_edition(mut self) -> Self {
        self.is_player_edition = true;
        self
    }

    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.reviews = reviews;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Check if the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original > self.price)
            .unwrap_or(false)
    }

    /// Whole-number savings percentage when on sale (e.g. 16 for "Save 16%").
    pub fn savings_percent(&self) -> Option<u32> {
        let original = self.original_price.filter(|o| *o > self.price)?;
        let ratio = self.price.amount() as f64 / original.amount() as f64;
        Some((100.0 - ratio * 100.0).round() as u32)
    }

    /// Whether the product can be added to the bag.
    pub fn is_purchasable(&self) -> bool {
        self.status != StockStatus::OutOfStock
    }

    /// Images for the detail gallery.
    ///
    /// Falls back to repeating the primary image when no gallery exists.
    pub fn display_gallery(&self) -> Vec<&str> {
        if self.gallery.is_empty() {
            vec![self.image.as_str(); FALLBACK_GALLERY_LEN]
        } else {
            self.gallery.iter().map(String::as_str).collect()
        }
    }
}

/// Jersey sizes offered on every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    /// All sizes in display order.
    pub const ALL: [Size; 5] = [Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommerceError::InvalidSize(s.to_string()))
    }
}
