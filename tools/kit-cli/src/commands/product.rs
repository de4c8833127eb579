//! Product detail command.

use anyhow::{Context as _, Result};
use kit_commerce::catalog::{media, Catalog, Size};
use kit_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{price_tag, stock_badge};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::builtin();
    let product = catalog
        .get(&ProductId::new(args.id.as_str()))
        .context("Run `kit catalog` to see available IDs")?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.section(&product.name);
    ctx.output.field("team", &product.team);
    ctx.output.field("league", product.league.name());
    ctx.output.field("season", &product.season);
    ctx.output.field(
        "edition",
        if product.is_player_edition {
            "Player"
        } else {
            "Fan"
        },
    );
    ctx.output.field("price", &price_tag(product));
    if let (Some(original), Some(pct)) = (product.original_price, product.savings_percent()) {
        ctx.output
            .field("was", &format!("{} (save {}%)", original.display(), pct));
    }
    ctx.output.field("status", &stock_badge(product.status));
    ctx.output.field(
        "rating",
        &format!("{:.1} ({} reviews)", product.rating, product.reviews),
    );
    ctx.output.field(
        "sizes",
        &Size::ALL
            .iter()
            .map(Size::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    );
    ctx.output.field(
        "customization",
        &format!("+{} per unit", ctx.config.store.customization_surcharge.display()),
    );

    ctx.output.section("Gallery");
    for (index, image) in product.display_gallery().into_iter().enumerate() {
        ctx.output.bullet(image);
        ctx.output
            .detail(&format!("fallback: {}", media::gallery_placeholder(product, index)));
    }
    ctx.output.field("card fallback", &media::card_placeholder(product));

    Ok(())
}
