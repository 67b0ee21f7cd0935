//! Single product detail.

use anyhow::{Context as _, Result};
use shop_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let api = ctx.api()?;

    let spinner = ctx.output.spinner("Fetching product...");
    let result = api.fetch_product(&id).await;
    spinner.finish_and_clear();

    let product = result.with_context(|| format!("Failed to load product {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("price", &product.price.display());
    if !product.category_id.is_empty() {
        ctx.output.kv("category", product.category_id.as_str());
    }
    if !product.brand_id.is_empty() {
        ctx.output.kv("brand", product.brand_id.as_str());
    }
    if !product.image_url.is_empty() {
        ctx.output.kv("image", &product.image_url);
    }
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }

    Ok(())
}
