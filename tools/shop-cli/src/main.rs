//! Shop CLI - Command line client for the shopcart catalog and cart.
//!
//! Commands:
//! - `shop load` - Load products from a JSON feed
//! - `shop recommend` - Recommend products for a phrase and budget
//! - `shop url` - Show a product's URL
//! - `shop upload` - Add a product to the cart with its image
//! - `shop list` - List the cart with its subtotal
//! - `shop remove` - Remove a product from the cart
//! - `shop shell` - Interactive menu
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, LoadArgs, RecommendArgs, RemoveArgs, UploadArgs, UrlArgs};

/// Shop CLI - Search the catalog and manage the shopping cart
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load products from a JSON feed into the catalog
    Load(LoadArgs),

    /// Recommend products matching a phrase within a budget
    Recommend(RecommendArgs),

    /// Show a product's URL
    Url(UrlArgs),

    /// Add a product to the cart with its image
    Upload(UploadArgs),

    /// List the shopping cart
    List,

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Interactive menu (default)
    Shell,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Load(args) => commands::catalog::load(args, &ctx).await,
        Commands::Recommend(args) => commands::recommend::run(args, &ctx).await,
        Commands::Url(args) => commands::catalog::url(args, &ctx).await,
        Commands::Upload(args) => commands::cart::upload(args, &ctx).await,
        Commands::List => commands::cart::list(&ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Shell => commands::shell::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
