//! Interactive menu.

use anyhow::Result;
use dialoguer::Select;

use super::{RecommendArgs, RemoveArgs, UploadArgs, UrlArgs};
use crate::context::Context;

const MENU: [&str; 6] = [
    "Recommend products",
    "Get a product's URL",
    "Upload to cart",
    "List shopping cart",
    "Remove item from cart",
    "Exit",
];

/// Run the shell command.
pub async fn run(ctx: &Context) -> Result<()> {
    ctx.output.header("Welcome to shopcart");

    loop {
        let choice = Select::new()
            .with_prompt("Choose a command")
            .items(&MENU)
            .default(0)
            .interact()?;

        let result = match choice {
            0 => {
                super::recommend::run(
                    RecommendArgs {
                        search: Vec::new(),
                        budget: None,
                        all: false,
                        page_size: None,
                    },
                    ctx,
                )
                .await
            }
            1 => super::catalog::url(UrlArgs { product_id: None }, ctx).await,
            2 => {
                super::cart::upload(
                    UploadArgs {
                        product_id: None,
                        image: None,
                    },
                    ctx,
                )
                .await
            }
            3 => super::cart::list(ctx).await,
            4 => {
                super::cart::remove(
                    RemoveArgs {
                        product_id: None,
                        yes: true,
                    },
                    ctx,
                )
                .await
            }
            _ => break,
        };

        // A failed command returns to the menu.
        if let Err(e) = result {
            ctx.output.error(&format!("{:#}", e));
        }
    }

    ctx.output.success("Thanks for visiting!");
    Ok(())
}
