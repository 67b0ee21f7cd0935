//! View state.
//!
//! Each screen's state is a plain value. Inputs arrive as events and
//! `reduce` returns the next state; derived fields (the filtered product
//! list, the cart total) are recomputed inside the reducer so they can never
//! go stale.

mod cart;
mod category;
mod outcome;
mod product;

pub use cart::{CartEvent, CartViewState};
pub use category::{CategoryEvent, CategoryViewState};
pub use outcome::LoadOutcome;
pub use product::{ProductEvent, ProductViewState};
