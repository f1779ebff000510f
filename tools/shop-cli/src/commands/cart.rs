//! Cart commands: upload, list and remove.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use shop_assets::encode_payload;
use shop_service::{RemoveRequest, UploadRequest};

use super::{api, value_or_prompt, RemoveArgs, UploadArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the upload command.
pub async fn upload(args: UploadArgs, ctx: &Context) -> Result<()> {
    let image = value_or_prompt(args.image, "Enter jpg filename")?;
    let path = ctx.resolve_path(&image);
    if !path.is_file() {
        bail!("Image file does not exist: {}", path.display());
    }
    let product_id = value_or_prompt(args.product_id, "Enter product id")?;

    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?;
    let filename = file_name(&path);
    ctx.output.debug(&format!(
        "Encoding {} ({})",
        filename,
        format_bytes(bytes.len() as u64)
    ));

    let stores = ctx.open_stores()?;
    let service = stores.service(ctx)?;

    let spinner = ctx.output.spinner("Uploading...");
    let result = service.upload(UploadRequest::new(
        product_id,
        filename,
        encode_payload(&bytes),
    ));
    spinner.finish_and_clear();
    let response = api(result)?;

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    ctx.output
        .success(&format!("Added product {} to cart", response.product_id));
    ctx.output.kv("URL", &response.product_url);
    if !response.image_stored {
        ctx.output.warn("The image could not be stored; the cart entry was kept");
    }
    Ok(())
}

/// Run the list command.
pub async fn list(ctx: &Context) -> Result<()> {
    let stores = ctx.open_stores()?;
    let service = stores.service(ctx)?;
    let response = api(service.list())?;

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    if response.items.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    let symbol = ctx.config.currency()?.symbol();
    for item in &response.items {
        ctx.output.cart_item(
            item.product_id.as_str(),
            &item.product_name,
            &format!("{}{}", symbol, item.price),
        );
    }
    println!(
        "SUBTOTAL ({} items): {}{}",
        response.subtotal.item_count, symbol, response.subtotal.total
    );
    Ok(())
}

/// Run the remove command.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let product_id = value_or_prompt(args.product_id, "Enter product id")?;

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove product {} from the cart?", product_id))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Removal cancelled");
            return Ok(());
        }
    }

    let stores = ctx.open_stores()?;
    let service = stores.service(ctx)?;
    let response = api(service.remove(RemoveRequest::new(product_id)))?;

    if ctx.output.is_json() {
        ctx.output.json(&response);
        return Ok(());
    }

    ctx.output
        .success(&format!("Removed product {} from cart", response.product_id));
    if !response.thumbnail_removed {
        ctx.output.warn("The thumbnail could not be deleted");
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
