//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, KitConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.section("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.field("file", &path.display().to_string()),
        None => ctx.output.field("file", "(defaults)"),
    }
    ctx.output.field("log_level", &ctx.config.log_level);

    let store = &ctx.config.store;
    ctx.output.section("[store]");
    ctx.output
        .field("customization_surcharge", &store.customization_surcharge.display());
    ctx.output.field("shipping.flat_rate", &store.shipping.flat_rate.display());
    ctx.output
        .field("shipping.free_threshold", &store.shipping.free_threshold.display());
    ctx.output.field("shop.max_price", &store.shop.max_price.display());
    ctx.output
        .field("shop.featured_count", &store.shop.featured_count.to_string());

    let consultant = &ctx.config.consultant;
    ctx.output.section("[consultant]");
    ctx.output.field("base_url", &consultant.base_url);
    ctx.output.field("model", &consultant.model);
    let key_state = if consultant.api_key().is_some() {
        "set"
    } else {
        "not set"
    };
    ctx.output.field(
        "api_key_env",
        &format!("{} ({})", consultant.api_key_env, key_state),
    );
    ctx.output
        .field("timeout_secs", &consultant.timeout_secs.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("kit.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.section("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect (errors, warnings) for a config.
fn check(config: &KitConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let store = &config.store;
    if let Err(err) = store.validate() {
        errors.push(format!("store: {}", err));
    }
    if store.shop.featured_count == 0 {
        warnings.push("store.shop.featured_count is 0; the home page shows no kits".to_string());
    }

    let consultant = &config.consultant;
    if consultant.model.trim().is_empty() {
        errors.push("consultant.model is required".to_string());
    }
    if !consultant.base_url.starts_with("http://") && !consultant.base_url.starts_with("https://") {
        errors.push("consultant.base_url must start with http:// or https://".to_string());
    }
    if consultant.timeout_secs == 0 {
        errors.push("consultant.timeout_secs must be at least 1".to_string());
    }
    if consultant.api_key().is_none() {
        warnings.push(format!(
            "{} is not set; `kit ask` will fail",
            consultant.api_key_env
        ));
    }

    if tracing_subscriber::EnvFilter::try_new(&config.log_level).is_err() {
        errors.push(format!("log_level '{}' is not a valid filter", config.log_level));
    }

    (errors, warnings)
}
