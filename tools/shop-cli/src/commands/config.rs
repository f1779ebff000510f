//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force, json } => init_config(force, json, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("path", &ctx.config.store.path);

    ctx.output.info("");
    ctx.output.info("[assets]");
    ctx.output.kv("root", &ctx.config.assets.root);
    ctx.output.kv("namespace", &ctx.config.assets.namespace);

    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output
        .kv("page_size", &ctx.config.search.page_size.to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level.to_string());
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("currency", &ctx.config.catalog.currency);

    Ok(())
}

async fn init_config(force: bool, json: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx
        .cwd
        .join(if json { "shop.json" } else { "shop.toml" });

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if json {
        ShopConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        std::fs::write(&config_path, generate_default_config())?;
    }

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.check();

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
