//! The static product catalog.

use std::sync::OnceLock;

use crate::catalog::{League, Product, StockStatus};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

const MESSI_MVP_2025: &str = "https://media.gettyimages.com/id/1428217516/photo/jamaica-v-argentina.jpg?s=2048x2048&w=gi&k=20&c=LJsNXoL2JCm7Sc2gU_FoTwA7R4u7sL3Y9SB5rVtT168=";
const BARCELONA_HOME: &str = "https://images.unsplash.com/photo-1660304755869-325c2ff6f02d?q=80&w=1118&auto=format&fit=crop";
const REAL_MADRID_HOME: &str = "https://images.unsplash.com/photo-1635710064268-69aa5d9355c1?q=80&w=1170&auto=format&fit=crop";
const ARGENTINA_HOME: &str = "https://images.unsplash.com/photo-1671016233853-5db7def7ff76?q=80&w=2070&auto=format&fit=crop";
const MAN_CITY_HOME: &str = "https://images.unsplash.com/photo-1612387050703-685c779375d4?q=80&w=687&auto=format&fit=crop";
const BRAZIL_HOME: &str = "https://images.unsplash.com/photo-1552066379-e7bfd22155c5?q=80&w=687&auto=format&fit=crop";
const ARSENAL_HOME: &str = "https://images.unsplash.com/photo-1577212017184-80cc0da11082?q=80&w=687&auto=format&fit=crop";
const LIVERPOOL_HOME: &str = "https://images.unsplash.com/photo-1606240724602-5b21f896396a?q=80&w=800&auto=format&fit=crop";
const JUVENTUS_HOME: &str = "https://images.unsplash.com/photo-1517927033932-b3d18e61fb3a?q=80&w=800&auto=format&fit=crop";
const BAYERN_HOME: &str = "https://images.unsplash.com/photo-1601004890684-d8cbf643f5f2?q=80&w=800&auto=format&fit=crop";
const AL_NASSR_HOME: &str = "https://images.unsplash.com/photo-1681232821213-90d6b5e585f5?q=80&w=800&auto=format&fit=crop";
const PORTUGAL_HOME: &str = "https://images.unsplash.com/photo-1549646875-0d291684c164?q=80&w=800&auto=format&fit=crop";
const STADIUM_NIGHT: &str = "https://images.unsplash.com/photo-1522778119026-d647f0596c20?q=80&w=2000&auto=format&fit=crop";
const PLAYER_EDITION_IMMERSION: &str = "https://images.unsplash.com/photo-1511886929837-354d827aae26?q=80&w=2671&auto=format&fit=crop";

/// An ordered, immutable list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in catalog, created once per process.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(builtin_products()))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by ID, failing with `ProductNotFound`.
    pub fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// The first `n` products, as featured on the home page.
    pub fn featured(&self, n: usize) -> &[Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Distinct leagues in first-seen order.
    pub fn leagues(&self) -> Vec<League> {
        let mut leagues = Vec::new();
        for product in &self.products {
            if !leagues.contains(&product.league) {
                leagues.push(product.league);
            }
        }
        leagues
    }

    /// Products from a single league, in catalog order.
    pub fn by_league(&self, league: League) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.league == league)
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            "messi-mvp-2025",
            "Messi MVP Edition 2025",
            "Argentina",
            League::International,
            "2025",
            Money::new(2800),
            MESSI_MVP_2025,
        )
        .with_original_price(Money::new(3200))
        .with_gallery(vec![
            MESSI_MVP_2025.to_string(),
            ARGENTINA_HOME.to_string(),
            PLAYER_EDITION_IMMERSION.to_string(),
        ])
        .player_edition()
        .with_status(StockStatus::PreOrder)
        .with_rating(5.0, 48)
        .with_color("75AADB"),
        Product::new(
            "barcelona-home-25",
            "FC Barcelona Home 25/26",
            "FC Barcelona",
            League::LaLiga,
            "2025/26",
            Money::new(1850),
            BARCELONA_HOME,
        )
        .with_gallery(vec![BARCELONA_HOME.to_string(), STADIUM_NIGHT.to_string()])
        .with_rating(4.8, 214)
        .with_color("A50044"),
        Product::new(
            "real-madrid-home-25",
            "Real Madrid Home 25/26",
            "Real Madrid",
            League::LaLiga,
            "2025/26",
            Money::new(1850),
            REAL_MADRID_HOME,
        )
        .with_original_price(Money::new(2200))
        .with_rating(4.9, 187)
        .with_color("FFFFFF"),
        Product::new(
            "argentina-home-24",
            "Argentina Home 2024",
            "Argentina",
            League::International,
            "2024",
            Money::new(1650),
            ARGENTINA_HOME,
        )
        .with_rating(4.9, 321)
        .with_color("75AADB"),
        Product::new(
            "man-city-home-25",
            "Manchester City Home 25/26",
            "Manchester City",
            League::PremierLeague,
            "2025/26",
            Money::new(1750),
            MAN_CITY_HOME,
        )
        .with_rating(4.7, 142)
        .with_color("6CABDD"),
        Product::new(
            "brazil-home-24",
            "Brazil Home 2024",
            "Brazil",
            League::International,
            "2024",
            Money::new(1600),
            BRAZIL_HOME,
        )
        .with_original_price(Money::new(1900))
        .with_rating(4.6, 98)
        .with_color("FCD116"),
        Product::new(
            "arsenal-home-25",
            "Arsenal Home 25/26",
            "Arsenal",
            League::PremierLeague,
            "2025/26",
            Money::new(1750),
            ARSENAL_HOME,
        )
        .with_rating(4.7, 156)
        .with_color("EF0107"),
        Product::new(
            "liverpool-home-25",
            "Liverpool Player Edition 25/26",
            "Liverpool",
            League::PremierLeague,
            "2025/26",
            Money::new(2450),
            LIVERPOOL_HOME,
        )
        .player_edition()
        .with_rating(4.8, 203)
        .with_color("C8102E"),
        Product::new(
            "juventus-home-25",
            "Juventus Home 25/26",
            "Juventus",
            League::SerieA,
            "2025/26",
            Money::new(1700),
            JUVENTUS_HOME,
        )
        .with_rating(4.5, 77)
        .with_color("000000"),
        Product::new(
            "bayern-home-25",
            "Bayern Munich Home 25/26",
            "Bayern Munich",
            League::Bundesliga,
            "2025/26",
            Money::new(1750),
            BAYERN_HOME,
        )
        .with_status(StockStatus::OutOfStock)
        .with_rating(4.6, 88)
        .with_color("DC052D"),
        Product::new(
            "al-nassr-home-25",
            "Al Nassr Home 25/26",
            "Al Nassr",
            League::SaudiProLeague,
            "2025/26",
            Money::new(1550),
            AL_NASSR_HOME,
        )
        .with_rating(4.4, 65)
        .with_color("FCD116"),
        Product::new(
            "portugal-home-24",
            "Portugal Home 2024",
            "Portugal",
            League::International,
            "2024",
            Money::new(1600),
            PORTUGAL_HOME,
        )
        .with_original_price(Money::new(2000))
        .with_rating(4.7, 134)
        .with_color("DA291C"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_builtin_sale_prices_are_consistent() {
        for product in Catalog::builtin().products() {
            if let Some(original) = product.original_price {
                assert!(product.price < original, "{} is not on sale", product.id);
            }
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_find_and_get() {
        let catalog = Catalog::builtin();
        let id = ProductId::new("juventus-home-25");
        assert_eq!(catalog.find(&id).map(|p| p.team.as_str()), Some("Juventus"));
        assert!(matches!(
            catalog.get(&ProductId::new("nope")),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_featured_is_prefix() {
        let catalog = Catalog::builtin();
        let featured = catalog.featured(4);
        assert_eq!(featured.len(), 4);
        assert_eq!(featured[0].id, catalog.products()[0].id);
        assert_eq!(catalog.featured(100).len(), catalog.len());
    }

    #[test]
    fn test_leagues_first_seen_order() {
        let catalog = Catalog::builtin();
        let leagues = catalog.leagues();
        assert_eq!(leagues[0], League::International);
        assert_eq!(leagues[1], League::LaLiga);
        assert_eq!(leagues.len(), 6);
    }

    #[test]
    fn test_by_league() {
        let catalog = Catalog::builtin();
        let la_liga: Vec<_> = catalog.by_league(League::LaLiga).collect();
        assert_eq!(la_liga.len(), 2);
        assert!(la_liga.iter().all(|p| p.league == League::LaLiga));
    }
}
