//! Sort order and the bundled product query.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::search::{apply, PriceRange};
use serde::{Deserialize, Serialize};

/// Ordering applied to a filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Keep the order the API returned.
    #[default]
    None,
    /// Price, low to high.
    LowestPriceFirst,
    /// Price, high to low.
    HighestPriceFirst,
}

impl SortOrder {
    /// Stable sort in place; equal prices keep their relative order.
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortOrder::None => {}
            SortOrder::LowestPriceFirst => products.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::HighestPriceFirst => products.sort_by(|a, b| b.price.cmp(&a.price)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::LowestPriceFirst => "lowest",
            SortOrder::HighestPriceFirst => "highest",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "" | "none" => Some(SortOrder::None),
            "lowest" | "price-asc" => Some(SortOrder::LowestPriceFirst),
            "highest" | "price-desc" => Some(SortOrder::HighestPriceFirst),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::None => "Default",
            SortOrder::LowestPriceFirst => "Price: Low to High",
            SortOrder::HighestPriceFirst => "Price: High to Low",
        }
    }
}

/// All catalog filter selections in one value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Free-text query; empty matches everything.
    pub text: String,
    /// Optional price filter.
    pub price_range: Option<PriceRange>,
    /// Sort order.
    pub sort: SortOrder,
    /// Restrict to one category.
    pub category: Option<CategoryId>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_price_range(mut self, range: impl Into<PriceRange>) -> Self {
        self.price_range = Some(range.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether this query would return its input unchanged.
    pub fn is_identity(&self) -> bool {
        self.text.is_empty()
            && self.price_range.map_or(true, |r| r.is_unbounded())
            && self.sort == SortOrder::None
            && self.category.is_none()
    }

    /// Run the query over `products`. The input is left untouched.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        match &self.category {
            Some(category) => {
                let in_category: Vec<Product> = products
                    .iter()
                    .filter(|p| &p.category_id == category)
                    .cloned()
                    .collect();
                apply(&in_category, &self.text, self.price_range.as_ref(), self.sort)
            }
            None => apply(products, &self.text, self.price_range.as_ref(), self.sort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;
    use crate::search::PriceBracket;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "Court Classic", Price::new(1_200_000)).with_category("sneakers"),
            Product::new("2", "Trail Pro", Price::new(2_500_000)).with_category("running"),
            Product::new("3", "Court Low", Price::new(900_000)).with_category("sneakers"),
            Product::new("4", "Slide", Price::new(150_000)).with_category("sandals"),
        ]
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(SortOrder::from_label("lowest"), Some(SortOrder::LowestPriceFirst));
        assert_eq!(SortOrder::from_label("PRICE-DESC"), Some(SortOrder::HighestPriceFirst));
        assert_eq!(SortOrder::from_label(""), Some(SortOrder::None));
        assert_eq!(SortOrder::from_label("name"), None);
        assert_eq!(SortOrder::from_label(SortOrder::HighestPriceFirst.label()), Some(SortOrder::HighestPriceFirst));
    }

    #[test]
    fn test_query_builder() {
        let query = ProductQuery::new()
            .with_text("court")
            .with_price_range(PriceBracket::From100KTo1M)
            .with_sort(SortOrder::HighestPriceFirst)
            .with_category("sneakers");

        assert_eq!(query.text, "court");
        assert_eq!(query.price_range, Some(PriceRange::between(100_000, 1_000_000)));
        assert_eq!(query.sort, SortOrder::HighestPriceFirst);
        assert!(!query.is_identity());
        assert!(ProductQuery::new().is_identity());
    }

    #[test]
    fn test_query_category_filter() {
        let results = ProductQuery::new()
            .with_category("sneakers")
            .with_sort(SortOrder::LowestPriceFirst)
            .apply(&catalog());

        let ids: Vec<_> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn test_query_combines_criteria() {
        let results = ProductQuery::new()
            .with_text("COURT")
            .with_price_range(PriceRange::at_least(1_000_000))
            .apply(&catalog());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Court Classic");
    }

    #[test]
    fn test_identity_query_returns_input() {
        let products = catalog();
        assert_eq!(ProductQuery::new().apply(&products), products);
    }
}
