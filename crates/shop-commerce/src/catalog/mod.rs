//! Catalog module.
//!
//! Contains the product and category records served by the shop API.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
