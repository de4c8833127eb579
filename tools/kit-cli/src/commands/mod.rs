//! CLI command implementations.

pub mod ask;
pub mod catalog;
pub mod config;
pub mod product;
pub mod session;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// League to show (e.g. "La Liga"); all leagues by default.
    #[arg(short, long)]
    pub league: Option<String>,

    /// Highest price to show, in taka.
    #[arg(short = 'p', long)]
    pub max_price: Option<i64>,

    /// Search text matched against name, team, and league.
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID (e.g. arsenal-home-25).
    pub id: String,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Path to a TOML session script.
    pub script: String,
}

/// Arguments for the ask command.
#[derive(Args)]
pub struct AskArgs {
    /// The question to ask.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
