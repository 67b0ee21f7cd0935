//! Order history.

use anyhow::{Context as _, Result};

use super::OrdersArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;

    let spinner = ctx.output.spinner("Fetching orders...");
    let result = api.fetch_orders().await;
    spinner.finish_and_clear();

    let mut orders = result.context("Failed to load orders")?;

    // Newest first; RFC 3339 timestamps sort lexically.
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    if let Some(limit) = args.limit {
        orders.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    if orders.is_empty() {
        ctx.output.info("No orders yet.");
        return Ok(());
    }

    ctx.output.header(&format!("Orders ({})", orders.len()));
    let widths = [16, 12, 16, 26];
    ctx.output.table_row(&["ID", "STATUS", "TOTAL", "CREATED"], &widths);
    for order in &orders {
        ctx.output.table_row(
            &[
                order.id.as_str(),
                &status_badge(order.status),
                &order.total_price.display(),
                &order.created_at,
            ],
            &widths,
        );
    }

    Ok(())
}
