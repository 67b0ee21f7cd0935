//! Cart commands.

use anyhow::{bail, Context as _, Result};
use shop_commerce::cart::{Cart, CartItem};
use shop_commerce::checkout::Order;
use shop_commerce::view::{CartEvent, CartViewState, LoadOutcome};
use shop_commerce::{CartItemId, OrderId, ProductId};
use shop_data::ShopApi;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show_cart(&api, ctx).await,
        CartCommand::Add { product, quantity } => add_item(&api, &product, quantity, ctx).await,
        CartCommand::Remove { id } => remove_item(&api, &id, ctx).await,
        CartCommand::Checkout => checkout(&api, ctx).await,
    }
}

async fn load_cart(api: &ShopApi, ctx: &Context) -> Result<CartViewState> {
    let spinner = ctx.output.spinner("Fetching cart...");
    let result = api.fetch_cart().await;
    spinner.finish_and_clear();

    let state = CartViewState::new().reduce(CartEvent::Loaded(LoadOutcome::from_result(result)));
    if let Some(error) = &state.error {
        bail!("Failed to load cart: {}", error);
    }
    Ok(state)
}

async fn show_cart(api: &ShopApi, ctx: &Context) -> Result<()> {
    let state = load_cart(api, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": state.cart.items,
            "total": state.total,
        }));
        return Ok(());
    }

    if state.cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    print_cart(&state.cart, ctx);
    ctx.output.kv("total", &state.total.display());
    Ok(())
}

fn print_cart(cart: &Cart, ctx: &Context) {
    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    let widths = [16, 30, 5, 16];
    ctx.output.table_row(&["ID", "NAME", "QTY", "SUBTOTAL"], &widths);
    for item in &cart.items {
        ctx.output.table_row(
            &[
                item.id.as_str(),
                &item.name,
                &item.quantity.to_string(),
                &item.line_total().display(),
            ],
            &widths,
        );
    }
}

async fn add_item(api: &ShopApi, product_id: &str, quantity: i64, ctx: &Context) -> Result<()> {
    let product_id = ProductId::new(product_id);
    let product = api
        .fetch_product(&product_id)
        .await
        .with_context(|| format!("Failed to load product {}", product_id))?;

    let item = CartItem::for_product(&product, quantity)?;
    ctx.output.debug(&format!("Adding {} x {}", quantity, product.name));

    let stored = api.add_to_cart(&item).await.context("Failed to add to cart")?;

    if ctx.output.is_json() {
        ctx.output.json(&stored);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Added {} x {} ({})",
        stored.quantity,
        stored.name,
        stored.line_total().display()
    ));
    Ok(())
}

async fn remove_item(api: &ShopApi, id: &str, ctx: &Context) -> Result<()> {
    let id = CartItemId::new(id);

    // Validate locally first so an unknown line is reported clearly.
    let state = load_cart(api, ctx).await?.reduce(CartEvent::ItemRemoved(id.clone()));
    if let Some(error) = state.error {
        bail!(error);
    }

    api.remove_from_cart(&id)
        .await
        .with_context(|| format!("Failed to remove {}", id))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "removed": id, "total": state.total }));
        return Ok(());
    }

    ctx.output.success(&format!("Removed {}", id));
    ctx.output.kv("total", &state.total.display());
    Ok(())
}

async fn checkout(api: &ShopApi, ctx: &Context) -> Result<()> {
    let state = load_cart(api, ctx).await?;

    let order = Order::from_cart(
        OrderId::generate(),
        &state.cart,
        chrono::Utc::now().to_rfc3339(),
    )?;
    tracing::info!(order = %order.id, items = order.item_count(), total = order.total_price.amount(), "placing order");

    let spinner = ctx.output.spinner("Placing order...");
    let result = api.create_order(&order).await;
    spinner.finish_and_clear();
    let placed = result.context("Failed to place order")?;

    if ctx.output.is_json() {
        ctx.output.json(&placed);
        return Ok(());
    }

    ctx.output.success(&format!("Order {} placed", placed.id));
    ctx.output.kv("status", placed.status.display_name());
    ctx.output.kv("total", &placed.total_price.display());
    Ok(())
}
