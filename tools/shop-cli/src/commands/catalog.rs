//! Catalog commands: feed ingestion and product URL lookup.

use anyhow::{Context as _, Result};
use shop_commerce::catalog::{ingest, ProductRecord};
use shop_service::ProductUrlRequest;

use super::{api, value_or_prompt, LoadArgs, UrlArgs};
use crate::context::Context;

/// Run the load command.
pub async fn load(args: LoadArgs, ctx: &Context) -> Result<()> {
    ctx.output.header("Loading catalog");

    let path = ctx.resolve_path(&args.file);
    ctx.output.step(1, 3, &format!("Reading {}", path.display()));
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read product feed: {}", path.display()))?;
    let records: Vec<ProductRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse product feed: {}", path.display()))?;
    ctx.output.kv("Records", &records.len().to_string());

    ctx.output.step(2, 3, "Opening store");
    let stores = ctx.open_stores()?;
    let currency = ctx.config.currency()?;

    ctx.output.step(3, 3, "Inserting products");
    let spinner = ctx.output.spinner("Inserting...");
    let report = ingest(&stores.db, records, currency);
    spinner.finish_and_clear();
    let report = report?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.kv("Inserted", &report.inserted.to_string());
    ctx.output.kv("Already present", &report.ignored.to_string());
    ctx.output
        .kv("Catalog size", &stores.db.product_count()?.to_string());

    for rejected in &report.rejected {
        ctx.output
            .warn(&format!("Skipped '{}': {}", rejected.title, rejected.reason));
    }

    ctx.output.success(&format!(
        "Loaded {} product(s) from {}",
        report.inserted,
        path.display()
    ));
    Ok(())
}

/// Run the url command.
pub async fn url(args: UrlArgs, ctx: &Context) -> Result<()> {
    let product_id = value_or_prompt(args.product_id, "Enter product id")?;

    let stores = ctx.open_stores()?;
    let service = stores.service(ctx)?;
    let response = api(service.product_url(ProductUrlRequest::new(product_id)))?;

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    ctx.output
        .product(response.product_id.as_str(), &response.product_url);
    Ok(())
}
