//! Category listing.

use anyhow::{bail, Result};
use shop_commerce::view::{CategoryEvent, CategoryViewState, LoadOutcome};
use shop_commerce::{CategoryId, CommerceError};

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;

    let spinner = ctx.output.spinner("Fetching categories...");
    let result = api.fetch_categories().await;
    spinner.finish_and_clear();

    let mut state = CategoryViewState::new().reduce(CategoryEvent::Loaded(LoadOutcome::from_result(result)));
    if let Some(error) = &state.error {
        bail!("Failed to load categories: {}", error);
    }

    if let Some(id) = args.id {
        let id = CategoryId::new(id);
        state = state.reduce(CategoryEvent::Selected(id.clone()));
        let category = state
            .selected
            .ok_or_else(|| CommerceError::CategoryNotFound(id.into_inner()))?;

        if ctx.output.is_json() {
            ctx.output.json(&category);
            return Ok(());
        }

        ctx.output.header(&category.name);
        ctx.output.kv("id", category.id.as_str());
        if !category.image_url.is_empty() {
            ctx.output.kv("image", &category.image_url);
        }
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&state.categories);
        return Ok(());
    }

    if state.categories.is_empty() {
        ctx.output.info("No categories available.");
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({})", state.categories.len()));
    let widths = [16, 32];
    ctx.output.table_row(&["ID", "NAME"], &widths);
    for category in &state.categories {
        ctx.output.table_row(&[category.id.as_str(), &category.name], &widths);
    }

    Ok(())
}
