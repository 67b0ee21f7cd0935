//! Shopping cart module.
//!
//! Contains the cart line as served by the cart endpoint and the local cart
//! that totals and edits those lines.

mod cart;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
