//! Placeholder images for products whose photos fail to load.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::Product;

const PLACEHOLDER_HOST: &str = "https://placehold.co";

/// Background used when a product has no colour of its own.
pub const DEFAULT_PLACEHOLDER_BG: &str = "1e293b";

/// Backgrounds light enough to need dark text.
const LIGHT_BACKGROUNDS: [&str; 3] = ["F7B5CD", "FCD116", "FFFFFF"];

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Background and text colours for a product's placeholder.
fn placeholder_colors(product: &Product) -> (&str, &'static str) {
    let bg = product.color.as_deref().unwrap_or(DEFAULT_PLACEHOLDER_BG);
    let fg = if LIGHT_BACKGROUNDS.contains(&bg) {
        "000000"
    } else {
        "FFFFFF"
    };
    (bg, fg)
}

/// Placeholder for a product card (600x800, team name as text).
pub fn card_placeholder(product: &Product) -> String {
    let (bg, fg) = placeholder_colors(product);
    format!(
        "{}/600x800/{}/{}?text={}",
        PLACEHOLDER_HOST,
        bg,
        fg,
        utf8_percent_encode(&product.team, URI_COMPONENT)
    )
}

/// Placeholder for the `index`-th (0-based) detail gallery image.
pub fn gallery_placeholder(product: &Product, index: usize) -> String {
    let (bg, fg) = placeholder_colors(product);
    format!(
        "{}/800x1000/{}/{}?text={}+View+{}&font=oswald",
        PLACEHOLDER_HOST,
        bg,
        fg,
        utf8_percent_encode(&product.team, URI_COMPONENT),
        index + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::League;
    use crate::money::Money;

    fn product(team: &str, color: Option<&str>) -> Product {
        let p = Product::new(
            "p1",
            "Jersey",
            team,
            League::LaLiga,
            "2025/26",
            Money::new(1500),
            "https://img.example/p1.jpg",
        );
        match color {
            Some(c) => p.with_color(c),
            None => p,
        }
    }

    #[test]
    fn test_card_placeholder_dark_background() {
        let url = card_placeholder(&product("FC Barcelona", Some("A50044")));
        assert_eq!(
            url,
            "https://placehold.co/600x800/A50044/FFFFFF?text=FC%20Barcelona"
        );
    }

    #[test]
    fn test_light_background_uses_black_text() {
        let url = card_placeholder(&product("Brazil", Some("FCD116")));
        assert_eq!(url, "https://placehold.co/600x800/FCD116/000000?text=Brazil");
    }

    #[test]
    fn test_missing_color_uses_default_background() {
        let url = card_placeholder(&product("Juventus", None));
        assert!(url.contains("/1e293b/FFFFFF?"));
    }

    #[test]
    fn test_gallery_placeholder_is_one_based() {
        let url = gallery_placeholder(&product("Real Madrid", Some("FFFFFF")), 0);
        assert_eq!(
            url,
            "https://placehold.co/800x1000/FFFFFF/000000?text=Real%20Madrid+View+1&font=oswald"
        );
    }

    #[test]
    fn test_team_name_is_uri_encoded() {
        let url = card_placeholder(&product("Bayern München & Co", None));
        assert!(url.ends_with("text=Bayern%20M%C3%BCnchen%20%26%20Co"));
    }
}
