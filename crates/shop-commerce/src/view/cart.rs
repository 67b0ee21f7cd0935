use crate::cart::{Cart, CartItem};
use crate::ids::CartItemId;
use crate::money::Price;
use crate::view::LoadOutcome;

/// Inputs to the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Loaded(LoadOutcome<CartItem>),
    QuantityChanged { id: CartItemId, quantity: i64 },
    ItemRemoved(CartItemId),
}

/// State of the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CartViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub cart: Cart,
    pub total: Price,
}

impl Default for CartViewState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            cart: Cart::new(),
            total: Price::ZERO,
        }
    }
}

impl CartViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state.
    ///
    /// A rejected edit leaves the cart as it was and reports why in `error`.
    pub fn reduce(mut self, event: CartEvent) -> Self {
        tracing::trace!(?event, "cart view event");

        match event {
            CartEvent::Loaded(LoadOutcome::Loaded(items)) => {
                self.loading = false;
                self.error = None;
                self.cart = Cart::from_items(items);
            }
            CartEvent::Loaded(LoadOutcome::Failed(message)) => {
                self.loading = false;
                self.error = Some(message);
                self.cart.clear();
            }
            CartEvent::QuantityChanged { id, quantity } => {
                self.error = self.cart.update_quantity(&id, quantity).err().map(|e| e.to_string());
            }
            CartEvent::ItemRemoved(id) => {
                self.error = self.cart.remove(&id).err().map(|e| e.to_string());
            }
        }

        self.total = self.cart.total();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn item(id: &str, price: i64, quantity: i64) -> CartItem {
        CartItem {
            id: CartItemId::new(id),
            product_id: ProductId::new(id),
            quantity,
            price: Price::new(price),
            name: id.to_string(),
            image_url: String::new(),
        }
    }

    fn loaded() -> CartViewState {
        CartViewState::new().reduce(CartEvent::Loaded(LoadOutcome::Loaded(vec![
            item("a", 100_000, 1),
            item("b", 20_000, 2),
        ])))
    }

    #[test]
    fn test_load_computes_total() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.total, Price::new(140_000));
    }

    #[test]
    fn test_quantity_change_updates_total() {
        let state = loaded().reduce(CartEvent::QuantityChanged {
            id: CartItemId::new("a"),
            quantity: 3,
        });
        assert_eq!(state.total, Price::new(340_000));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_remove_updates_total() {
        let state = loaded().reduce(CartEvent::ItemRemoved(CartItemId::new("b")));
        assert_eq!(state.total, Price::new(100_000));
        assert_eq!(state.cart.items.len(), 1);
    }

    #[test]
    fn test_rejected_edit_reports_error() {
        let before = loaded();
        let after = before.clone().reduce(CartEvent::QuantityChanged {
            id: CartItemId::new("a"),
            quantity: -2,
        });
        assert_eq!(after.cart, before.cart);
        assert_eq!(after.error.as_deref(), Some("Invalid quantity: -2"));

        let after = after.reduce(CartEvent::ItemRemoved(CartItemId::new("a")));
        assert!(after.error.is_none());
    }

    #[test]
    fn test_failed_load() {
        let state = loaded().reduce(CartEvent::Loaded(LoadOutcome::Failed("offline".to_string())));
        assert_eq!(state.error.as_deref(), Some("offline"));
        assert_eq!(state.total, Price::ZERO);
    }
}
