//! Scripted shopping session command.
//!
//! A script is a TOML file with an optional `[checkout]` form and an
//! ordered `[[actions]]` list:
//!
//! ```toml
//! [checkout]
//! full_name = "Rahim Uddin"
//! phone = "01700000000"
//! district = "Dhaka"
//! address = "House 12, Road 4"
//! payment = "bkash"
//!
//! [[actions]]
//! action = "add"
//! product = "arsenal-home-25"
//! size = "M"
//! name = "Saka"
//! number = "7"
//!
//! [[actions]]
//! action = "checkout"
//! ```

use anyhow::{anyhow, bail, Context as _, Result};
use kit_commerce::cart::{CartLine, Customization, FontStyle};
use kit_commerce::catalog::{Catalog, CategoryFilter, Size};
use kit_commerce::checkout::{CheckoutForm, OrderConfirmation};
use kit_commerce::store::{Navigation, Page, Store};
use kit_commerce::{CartLineId, Money, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SessionArgs;
use crate::context::Context;

/// A parsed session script.
#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub checkout: Option<CheckoutForm>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// One step of a script.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    /// Go to a page; `product` is required for the product page.
    Navigate {
        page: String,
        #[serde(default)]
        product: Option<String>,
    },
    /// Pick a league, or "All".
    Category { league: String },
    /// Add one unit.
    Add {
        product: String,
        size: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        number: Option<String>,
        #[serde(default)]
        font: Option<String>,
    },
    Remove { line: String },
    Quantity { line: String, delta: i64 },
    Wishlist { product: String },
    Clear,
    /// Proceed to details and place the order with the `[checkout]` form.
    Checkout,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Navigate { .. } => "navigate",
            Action::Category { .. } => "category",
            Action::Add { .. } => "add",
            Action::Remove { .. } => "remove",
            Action::Quantity { .. } => "quantity",
            Action::Wishlist { .. } => "wishlist",
            Action::Clear => "clear",
            Action::Checkout => "checkout",
        }
    }
}

/// State of the store after a script.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub page: Page,
    pub category: String,
    pub lines: Vec<CartLine>,
    pub cart_count: u64,
    pub cart_total: Money,
    pub shipping: Money,
    pub grand_total: Money,
    pub wishlist: Vec<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderConfirmation>,
}

impl SessionReport {
    fn from_store(store: &Store) -> Self {
        Self {
            page: store.current_page(),
            category: store.active_category().label().to_string(),
            lines: store.cart().lines().to_vec(),
            cart_count: store.cart_count(),
            cart_total: store.cart_total(),
            shipping: store.shipping_cost(),
            grand_total: store.grand_total(),
            wishlist: store.wishlist().ids().to_vec(),
            order: store.last_order().cloned(),
        }
    }
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read session script: {}", path.display()))?;
    let script: Script = toml::from_str(&content)
        .with_context(|| format!("Failed to parse session script: {}", path.display()))?;

    ctx.config
        .store
        .validate()
        .context("Fix [store] in the config file, then run `kit config validate`")?;
    let mut store = Store::with_config(ctx.config.store.clone());
    let total = script.actions.len();
    debug!(script = %path.display(), actions = total, "running session script");
    for (index, action) in script.actions.iter().enumerate() {
        ctx.output.step(index + 1, total, action.name());
        apply(&mut store, Catalog::builtin(), action, script.checkout.as_ref())
            .with_context(|| format!("Action {} ({}) failed", index + 1, action.name()))?;
    }

    let report = SessionReport::from_store(&store);
    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }
    print_report(&report, ctx);
    Ok(())
}

/// Apply one action to the store.
pub fn apply(
    store: &mut Store,
    catalog: &Catalog,
    action: &Action,
    form: Option<&CheckoutForm>,
) -> Result<()> {
    match action {
        Action::Navigate { page, product } => {
            let page: Page = page.parse()?;
            let navigation = match (page, product) {
                (Page::Product, Some(id)) => {
                    Navigation::Product(catalog.get(&ProductId::new(id.as_str()))?.clone())
                }
                (Page::Product, None) => bail!("navigating to the product page needs a product"),
                (page, _) => Navigation::to_page(page)
                    .ok_or_else(|| anyhow!("cannot navigate to {}", page))?,
            };
            store.navigate_to(navigation);
        }
        Action::Category { league } => {
            let category: CategoryFilter = league.parse()?;
            store.set_category(category);
        }
        Action::Add {
            product,
            size,
            name,
            number,
            font,
        } => {
            let product = catalog.get(&ProductId::new(product.as_str()))?;
            let size: Size = size.parse()?;
            let customization = if name.is_some() || number.is_some() {
                let font = match font {
                    Some(font) => font.parse::<FontStyle>()?,
                    None => FontStyle::default(),
                };
                Some(Customization::new(
                    name.as_deref().unwrap_or_default(),
                    number.as_deref().unwrap_or_default(),
                    font,
                )?)
            } else {
                None
            };
            store.add_to_cart(product, size, customization);
        }
        Action::Remove { line } => store.remove_from_cart(&CartLineId::new(line.as_str())),
        Action::Quantity { line, delta } => {
            store.update_quantity(&CartLineId::new(line.as_str()), *delta);
        }
        Action::Wishlist { product } => {
            store.toggle_wishlist(&ProductId::new(product.as_str()));
        }
        Action::Clear => store.clear_cart(),
        Action::Checkout => {
            let form = form.ok_or_else(|| anyhow!("checkout needs a [checkout] table"))?;
            store.navigate_to(Navigation::Cart);
            store.proceed_to_checkout();
            store.place_order(form)?;
        }
    }
    Ok(())
}

fn print_report(report: &SessionReport, ctx: &Context) {
    ctx.output.section("Shopping Bag");
    if report.lines.is_empty() {
        ctx.output.info("Your bag is empty.");
    }
    for line in &report.lines {
        ctx.output.bag_line(line);
    }
    ctx.output.field("items", &report.cart_count.to_string());
    ctx.output.totals(report.cart_total, report.shipping, report.grand_total);
    ctx.output.field("page", report.page.as_str());
    ctx.output.field("category", &report.category);
    if !report.wishlist.is_empty() {
        let ids: Vec<&str> = report.wishlist.iter().map(ProductId::as_str).collect();
        ctx.output.field("wishlist", &ids.join(", "));
    }

    if let Some(order) = &report.order {
        ctx.output.success(&format!(
            "Order {} placed: {} item(s), {} via {} ({})",
            order.reference,
            order.item_count(),
            order.pricing.grand_total.display(),
            order.payment.display_name(),
            order.payment.handling_note()
        ));
    }
}
