//! Product query engine.

use crate::catalog::Product;
use crate::search::{PriceRange, SortOrder};

/// Filter and sort `products`.
///
/// A product is kept when `query` is empty or occurs (case-insensitively)
/// in its name or description, and, if `price_range` is given, its price
/// lies inside the range. The survivors are then stably sorted by `sort`.
///
/// Pure: the input slice is never modified and the same inputs always give
/// the same output. Re-applying to the output is a no-op.
pub fn apply(
    products: &[Product],
    query: &str,
    price_range: Option<&PriceRange>,
    sort: SortOrder,
) -> Vec<Product> {
    let needle = query.to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| p.matches_lowercase(&needle))
        .filter(|p| price_range.map_or(true, |range| range.contains(p.price)))
        .cloned()
        .collect();

    sort.sort(&mut result);
    result
}
