//! Terminal rendering for the storefront CLI.
//!
//! Text builders (`price_tag`, `bag_line`, ...) return plain strings so they
//! can be tested; `Output` adds colour and stays silent in JSON mode except
//! for errors and the JSON payload itself.

use std::time::Duration;

use console::{style, Style};
use indicatif::{ProgressBar, ProgressStyle};
use kit_commerce::cart::CartLine;
use kit_commerce::catalog::{Product, StockStatus};
use kit_commerce::Money;

/// Column widths of the shop listing: ID, NAME, PRICE, STATUS.
const LISTING_WIDTHS: [usize; 4] = [22, 32, 14, 12];

/// Kind of status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warn,
    Error,
}

impl Tone {
    fn marker(self) -> String {
        match self {
            Tone::Info => style("ℹ").blue().to_string(),
            Tone::Success => style("✓").green().to_string(),
            Tone::Warn => style("⚠").yellow().to_string(),
            Tone::Error => style("✗").red().to_string(),
        }
    }
}

/// Styled or JSON output for the `kit` commands.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn say(&self, tone: Tone, msg: &str) {
        match tone {
            Tone::Error if self.json => eprintln!("{}", serde_json::json!({ "error": msg })),
            _ if self.json => {}
            Tone::Error => eprintln!("{} {}", tone.marker(), style(msg).red()),
            Tone::Warn => eprintln!("{} {}", tone.marker(), msg),
            _ => println!("{} {}", tone.marker(), msg),
        }
    }

    pub fn info(&self, msg: &str) {
        self.say(Tone::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.say(Tone::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.say(Tone::Warn, msg);
    }

    /// Printed in JSON mode too, as `{"error": ...}` on stderr.
    pub fn error(&self, msg: &str) {
        self.say(Tone::Error, msg);
    }

    /// Only with `--verbose`.
    pub fn detail(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Section title, e.g. a page name or product name.
    pub fn section(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// One labelled attribute under a section.
    pub fn field(&self, label: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(label).dim(), value);
        }
    }

    pub fn bullet(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Progress through a scripted session.
    pub fn step(&self, num: usize, total: usize, action: &str) {
        if !self.json {
            println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), action);
        }
    }

    /// Header row of the shop listing.
    pub fn listing_header(&self) {
        if !self.json {
            let header = pad_columns(&["ID", "NAME", "PRICE", "STATUS"]);
            println!("  {}", style(header).bold());
        }
    }

    /// One product in the shop listing.
    pub fn listing_row(&self, product: &Product) {
        if self.json {
            return;
        }
        let cols = pad_columns(&[
            product.id.as_str(),
            &product.name,
            &price_tag(product),
            "",
        ]);
        println!("  {}{}", cols, stock_badge(product.status));
    }

    /// One line of the shopping bag.
    pub fn bag_line(&self, line: &CartLine) {
        if !self.json {
            println!("  {} {}", style("•").dim(), bag_line(line));
        }
    }

    /// Subtotal, shipping and total rows under the bag.
    pub fn totals(&self, subtotal: Money, shipping: Money, total: Money) {
        if self.json {
            return;
        }
        self.field("subtotal", &subtotal.display());
        let shipping = shipping_label(shipping);
        if shipping == "FREE" {
            self.field("shipping", &style(shipping).green().to_string());
        } else {
            self.field("shipping", &shipping);
        }
        self.field("total", &style(total.display()).bold().to_string());
    }

    /// Spinner while waiting on the consultant.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Coloured label for a stock status.
pub fn stock_badge(status: StockStatus) -> String {
    let colour = match status {
        StockStatus::InStock => Style::new().green(),
        StockStatus::PreOrder => Style::new().yellow(),
        StockStatus::OutOfStock => Style::new().red(),
    };
    colour.apply_to(status.as_str()).to_string()
}

/// Price with the sale discount when there is one, e.g. "৳1,750 -12%".
pub fn price_tag(product: &Product) -> String {
    match product.savings_percent() {
        Some(pct) => format!("{} -{}%", product.price.display(), pct),
        None => product.price.display(),
    }
}

/// "FREE" or the shipping amount.
pub fn shipping_label(shipping: Money) -> String {
    if shipping.is_zero() {
        "FREE".to_string()
    } else {
        shipping.display()
    }
}

/// Bag line text, e.g. "line-2  Arsenal Home (M) [SAKA • 7, Retro] x2  ৳5,100".
pub fn bag_line(line: &CartLine) -> String {
    let print = line
        .customization
        .as_ref()
        .map(|c| format!(" [{}, {}]", c.label(), c.font()))
        .unwrap_or_default();
    format!(
        "{}  {} ({}){} x{}  {}",
        line.id,
        line.product_name,
        line.size,
        print,
        line.quantity,
        line.total().display()
    )
}

fn pad_columns(cols: &[&str]) -> String {
    cols.iter()
        .zip(LISTING_WIDTHS)
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_commerce::cart::{Cart, Customization, FontStyle};
    use kit_commerce::catalog::{League, Size};

    fn kit(price: i64) -> Product {
        Product::new(
            "arsenal-home-25",
            "Arsenal Home 25/26",
            "Arsenal",
            League::PremierLeague,
            "2025/26",
            Money::new(price),
            "arsenal.jpg",
        )
    }

    #[test]
    fn test_price_tag_shows_sale() {
        assert_eq!(price_tag(&kit(1750)), "\u{09f3}1,750");
        let sale = kit(1500).with_original_price(Money::new(2000));
        assert_eq!(price_tag(&sale), "\u{09f3}1,500 -25%");
    }

    #[test]
    fn test_shipping_label() {
        assert_eq!(shipping_label(Money::zero()), "FREE");
        assert_eq!(shipping_label(Money::new(100)), "\u{09f3}100");
    }

    #[test]
    fn test_bag_line_text() {
        let mut cart = Cart::new();
        let plain = cart.add(&kit(1750), Size::M, None);
        let print = Customization::new("saka", "7", FontStyle::Retro).unwrap();
        let printed = cart.add(&kit(1750), Size::L, Some(print));
        cart.update_quantity(&printed, 1);

        assert_eq!(
            bag_line(cart.get(&plain).unwrap()),
            "line-1  Arsenal Home 25/26 (M) x1  \u{09f3}1,750"
        );
        assert_eq!(
            bag_line(cart.get(&printed).unwrap()),
            "line-2  Arsenal Home 25/26 (L) [SAKA \u{2022} 7, Retro] x2  \u{09f3}5,100"
        );
    }

    #[test]
    fn test_listing_columns_padded() {
        let row = pad_columns(&["ID", "NAME", "PRICE", ""]);
        assert!(row.starts_with("ID                      NAME"));
    }
}
