//! Shop listing command.

use anyhow::{Context as _, Result};
use kit_commerce::catalog::{Catalog, CategoryFilter};
use kit_commerce::search::ShopFilter;
use kit_commerce::Money;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::builtin();

    let category = match args.league.as_deref() {
        Some(league) => league
            .parse::<CategoryFilter>()
            .with_context(|| format!("Unknown league '{}'", league))?,
        None => CategoryFilter::All,
    };
    let max_price = args
        .max_price
        .map(Money::new)
        .unwrap_or(ctx.config.store.shop.max_price);
    let mut filter = ShopFilter::new(category).with_max_price(max_price);
    if let Some(query) = args.query {
        filter = filter.with_query(query);
    }

    let products = filter.apply(catalog);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.section(&format!(
        "{} (up to {})",
        filter.category.label(),
        filter.max_price.display()
    ));

    if products.is_empty() {
        ctx.output.info("No kits match these filters.");
        ctx.output.info(&format!(
            "Leagues: {}",
            catalog
                .leagues()
                .iter()
                .map(|l| l.name())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        return Ok(());
    }

    ctx.output.listing_header();
    for product in &products {
        ctx.output.listing_row(product);
    }
    ctx.output.info(&format!("{} kit(s)", products.len()));

    Ok(())
}
