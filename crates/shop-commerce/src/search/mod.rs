//! Search module.
//!
//! The product query engine: free-text match, price range filter and
//! price sort over an already fetched product list.

mod engine;
mod filter;
mod query;

pub use engine::apply;
pub use filter::{PriceBracket, PriceRange};
pub use query::{ProductQuery, SortOrder};
