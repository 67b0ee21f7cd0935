//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CartItemId, ProductId};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A cart line as exchanged with the cart endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price.
    pub price: Price,
    pub name: String,
    pub image_url: String,
}

impl CartItem {
    /// Create a line for `quantity` units of `product`.
    pub fn for_product(product: &Product, quantity: i64) -> Result<Self, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        validate_quantity(quantity)?;
        Ok(Self {
            id: CartItemId::generate(),
            product_id: product.id.clone(),
            quantity,
            price: product.price,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
        })
    }

    /// Unit price times quantity, saturating on overflow.
    pub fn line_total(&self) -> Price {
        self.price.saturating_mul(self.quantity)
    }
}

/// A shopping cart: an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Add units of a product.
    ///
    /// An existing line for the same product has its quantity increased;
    /// otherwise a new line is appended. Returns the line's ID.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<CartItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            validate_quantity(new_quantity)?;
            existing.quantity = new_quantity;
            return Ok(existing.id.clone());
        }

        let item = CartItem::for_product(product, quantity)?;
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, id: &CartItemId, quantity: i64) -> Result<(), CommerceError> {
        if quantity == 0 {
            return self.remove(id).map(|_| ());
        }
        validate_quantity(quantity)?;

        let item = self
            .items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a line and return it.
    pub fn remove(&mut self, id: &CartItemId) -> Result<CartItem, CommerceError> {
        let index = self
            .items
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn get(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Price {
        self.items
            .iter()
            .fold(Price::ZERO, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

fn validate_quantity(quantity: i64) -> Result<(), CommerceError> {
    if quantity < 0 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM));
    }
    Ok(())
}
