//! Product listing.

use anyhow::{anyhow, bail, Result};
use shop_commerce::catalog::Product;
use shop_commerce::search::{PriceBracket, PriceRange, SortOrder};
use shop_commerce::view::{LoadOutcome, ProductEvent, ProductViewState};
use shop_commerce::CategoryId;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let sort = parse_sort(&args.sort)?;
    let price_range = parse_price_range(args.bracket.as_deref(), args.min.as_deref(), args.max.as_deref())?;

    let mut state = ProductViewState::new()
        .reduce(ProductEvent::QueryChanged(args.query.unwrap_or_default()))
        .reduce(ProductEvent::PriceRangeChanged(price_range))
        .reduce(ProductEvent::SortChanged(sort))
        .reduce(ProductEvent::CategoryChanged(args.category.map(CategoryId::new)));

    let api = ctx.api()?;
    let spinner = ctx.output.spinner("Fetching products...");
    let result = api.fetch_products().await;
    spinner.finish_and_clear();

    state = state.reduce(ProductEvent::Loaded(LoadOutcome::from_result(result)));

    if let Some(error) = &state.error {
        bail!("Failed to load products: {}", error);
    }

    let shown = match args.limit {
        Some(limit) => &state.filtered[..limit.min(state.filtered.len())],
        None => &state.filtered[..],
    };

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    if state.is_empty_catalog() {
        ctx.output.info("No products available.");
        return Ok(());
    }
    if state.has_no_matches() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }

    ctx.output.header(&format!("Products ({} of {})", shown.len(), state.products.len()));
    if let Some(range) = &state.price_range {
        ctx.output.debug(&format!("Price: {}", range));
    }
    ctx.output.debug(&format!("Sort: {}", state.sort.display_name()));

    print_table(shown, ctx);

    Ok(())
}

fn print_table(products: &[Product], ctx: &Context) {
    let widths = [12, 36, 16, 12];
    ctx.output.table_row(&["ID", "NAME", "PRICE", "CATEGORY"], &widths);
    for product in products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.price.display(),
                product.category_id.as_str(),
            ],
            &widths,
        );
    }
}

fn parse_sort(label: &str) -> Result<SortOrder> {
    SortOrder::from_label(label)
        .ok_or_else(|| anyhow!("Unknown sort order '{}'. Use none, lowest or highest.", label))
}

/// A preset bracket, explicit bounds, or no price filter.
fn parse_price_range(
    bracket: Option<&str>,
    min: Option<&str>,
    max: Option<&str>,
) -> Result<Option<PriceRange>> {
    if let Some(label) = bracket {
        let bracket = PriceBracket::from_label(label).ok_or_else(|| {
            let known: Vec<&str> = PriceBracket::ALL.iter().map(|b| b.label()).collect();
            anyhow!("Unknown price bracket '{}'. Use one of: {}", label, known.join(", "))
        })?;
        return Ok(Some(bracket.range()));
    }

    if min.is_none() && max.is_none() {
        return Ok(None);
    }

    Ok(Some(PriceRange::from_bounds(min.unwrap_or(""), max.unwrap_or(""))))
}
