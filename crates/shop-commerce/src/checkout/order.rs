//! Order types.

use crate::cart::{Cart, CartItem};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Statuses this client does not know decode as `Unknown` rather than
/// failing the whole order list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub total_price: Price,
    pub status: OrderStatus,
    pub created_at: String,
}

impl Order {
    /// Build a pending order from the current cart contents.
    pub fn from_cart(
        id: OrderId,
        cart: &Cart,
        created_at: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        Ok(Self {
            id,
            items: cart.items.clone(),
            total_price: cart.total(),
            status: OrderStatus::Pending,
            created_at: created_at.into(),
        })
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_order_from_cart() {
        let mut cart = Cart::new();
        cart.add_product(&Product::new("p-1", "Runner", Price::new(300_000)), 2)
            .unwrap();

        let order = Order::from_cart(OrderId::new("o-1"), &cart, "2024-12-01T08:00:00Z").unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_price, Price::new(600_000));
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.items, cart.items);
    }

    #[test]
    fn test_order_from_empty_cart() {
        let result = Order::from_cart(OrderId::new("o-2"), &Cart::new(), "now");
        assert_eq!(result, Err(CommerceError::EmptyCart));
    }

    #[test]
    fn test_order_status_wire_format() {
        let order: Order = serde_json::from_str(
            r#"{"id": "o-3", "items": [], "totalPrice": 10.0, "status": "shipped", "createdAt": "t"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.total_price, Price::new(10));

        let order: Order = serde_json::from_str(r#"{"id": "o-4", "status": "on-hold"}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);

        let value = serde_json::to_value(OrderStatus::Delivered).unwrap();
        assert_eq!(value, "delivered");
    }
}
