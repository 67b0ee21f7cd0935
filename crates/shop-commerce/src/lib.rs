//! Catalog types and client-side logic for the shop client.
//!
//! This crate has no I/O. It provides:
//!
//! - **Catalog**: Products and categories as served by the shop API
//! - **Search**: The product query engine (text match, price range, sort)
//! - **Cart**: Cart lines and totals
//! - **Checkout**: Orders built from a cart
//! - **Account**: Customer records and login payloads
//! - **View**: Explicit view state with pure reducers
//!
//! # Example
//!
//! ```
//! use shop_commerce::prelude::*;
//!
//! let products = vec![
//!     Product::new("1", "Red Shoe", Price::new(100)),
//!     Product::new("2", "Blue Shoe", Price::new(50)),
//!     Product::new("3", "Red Hat", Price::new(75)),
//! ];
//!
//! let shoes = apply(&products, "shoe", None, SortOrder::LowestPriceFirst);
//! let names: Vec<_> = shoes.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Blue Shoe", "Red Shoe"]);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod view;

pub use error::CommerceError;
pub use ids::*;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Search
    pub use crate::search::{apply, PriceBracket, PriceRange, ProductQuery, SortOrder};

    // Cart / checkout / account
    pub use crate::account::{Customer, LoginRequest};
    pub use crate::cart::{Cart, CartItem};
    pub use crate::checkout::{Order, OrderStatus};

    // View state
    pub use crate::view::{
        CartEvent, CartViewState, CategoryEvent, CategoryViewState, LoadOutcome, ProductEvent,
        ProductViewState,
    };
}
