//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod recommend;
pub mod shell;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use shop_service::ApiError;

/// Arguments for the load command.
#[derive(Args)]
pub struct LoadArgs {
    /// JSON file holding an array of product records.
    pub file: String,
}

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// Search phrase (prompted for when omitted).
    pub search: Vec<String>,

    /// Maximum price, e.g. 49.99 (prompted for when omitted).
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Show every result without asking between pages.
    #[arg(short, long)]
    pub all: bool,

    /// Results per page (default from config).
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the url command.
#[derive(Args)]
pub struct UrlArgs {
    /// Product id.
    pub product_id: Option<String>,
}

/// Arguments for the upload command.
#[derive(Args)]
pub struct UploadArgs {
    /// Product id to add to the cart.
    pub product_id: Option<String>,

    /// Local .jpg or .jpeg image of the product.
    #[arg(short, long)]
    pub image: Option<String>,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product id to remove from the cart.
    pub product_id: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
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

        /// Write shop.json instead of shop.toml.
        #[arg(long)]
        json: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Turn a service error into a CLI error carrying just its message.
pub(crate) fn api<T>(result: Result<T, ApiError>) -> Result<T> {
    result.map_err(|e| anyhow!("{} ({})", e.message, e.status.as_u16()))
}

/// Use the given value or ask for one.
pub(crate) fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()?),
    }
}
