//! Keyword recommendations with interactive paging.

use anyhow::Result;
use dialoguer::Confirm;
use shop_commerce::search::Paginator;
use shop_service::{RecommendRequest, RecommendedProduct};

use super::{api, value_or_prompt, RecommendArgs};
use crate::context::Context;
use crate::output::Output;

/// Run the recommend command.
pub async fn run(args: RecommendArgs, ctx: &Context) -> Result<()> {
    let search = if args.search.is_empty() {
        value_or_prompt(None, "Enter your search")?
    } else {
        args.search.join(" ")
    };
    let budget = value_or_prompt(args.budget, "Enter your budget")?;
    let page_size = args.page_size.unwrap_or(ctx.config.search.page_size);

    let stores = ctx.open_stores()?;
    let service = stores.service(ctx)?;
    let products = api(service.recommend(RecommendRequest::new(search, budget.as_str())))?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let all = args.all;
    show_pages(&ctx.output, products, page_size, || {
        if all {
            return Ok(true);
        }
        Ok(Confirm::new()
            .with_prompt("Would you like to see more results?")
            .default(false)
            .interact()?)
    })?;

    Ok(())
}

/// Print ranked products a page at a time, asking `more` before each page
/// after the first. Returns how many products were shown.
pub(crate) fn show_pages<F>(
    output: &Output,
    products: Vec<RecommendedProduct>,
    page_size: usize,
    mut more: F,
) -> Result<usize>
where
    F: FnMut() -> Result<bool>,
{
    let mut pages = Paginator::new(products, page_size)?;
    let mut shown = 0;

    while let Some(page) = pages.next_page() {
        if page.is_no_match() {
            output.info("No matching product found");
            break;
        }

        for product in &page.items {
            output.product(product.product_id.as_str(), &product.product_url);
        }
        shown += page.items.len();

        if !page.has_more {
            output.info("No more recommended products");
            break;
        }
        if !more()? {
            break;
        }
    }

    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::ProductId;

    fn products(n: usize) -> Vec<RecommendedProduct> {
        (1..=n)
            .map(|i| RecommendedProduct {
                product_id: ProductId::new(i.to_string()),
                product_url: format!("https://shop.test/{}", i),
            })
            .collect()
    }

    #[test]
    fn test_show_pages_stops_when_declined() {
        let output = Output::new(false, true);
        let mut asked = 0;
        let shown = show_pages(&output, products(7), 5, || {
            asked += 1;
            Ok(false)
        })
        .unwrap();
        assert_eq!(shown, 5);
        assert_eq!(asked, 1);
    }

    #[test]
    fn test_show_pages_all() {
        let output = Output::new(false, true);
        let mut asked = 0;
        let shown = show_pages(&output, products(12), 5, || {
            asked += 1;
            Ok(true)
        })
        .unwrap();
        assert_eq!(shown, 12);
        assert_eq!(asked, 2);
    }

    #[test]
    fn test_show_pages_short_result_never_asks() {
        let output = Output::new(false, true);
        let shown = show_pages(&output, products(3), 5, || panic!("asked")).unwrap();
        assert_eq!(shown, 3);
        let shown = show_pages(&output, Vec::new(), 5, || panic!("asked")).unwrap();
        assert_eq!(shown, 0);
    }
}
