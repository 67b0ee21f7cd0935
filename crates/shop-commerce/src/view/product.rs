use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::search::{PriceRange, ProductQuery, SortOrder};
use crate::view::LoadOutcome;

/// Inputs to the product list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEvent {
    /// The product fetch finished.
    Loaded(LoadOutcome<Product>),
    /// User edited the search box.
    QueryChanged(String),
    /// User picked (or cleared) a price range.
    PriceRangeChanged(Option<PriceRange>),
    /// User picked a sort order.
    SortChanged(SortOrder),
    /// User picked (or cleared) a category.
    CategoryChanged(Option<CategoryId>),
    /// User asked to fetch again after a failure.
    Reload,
}

/// State of the product list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductViewState {
    pub loading: bool,
    pub error: Option<String>,
    /// Everything the last successful fetch returned.
    pub products: Vec<Product>,
    pub query: String,
    pub price_range: Option<PriceRange>,
    pub sort: SortOrder,
    pub category: Option<CategoryId>,
    /// `products` with the current selections applied.
    pub filtered: Vec<Product>,
}

impl Default for ProductViewState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            products: Vec::new(),
            query: String::new(),
            price_range: None,
            sort: SortOrder::None,
            category: None,
            filtered: Vec::new(),
        }
    }
}

impl ProductViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selections as a single query.
    pub fn product_query(&self) -> ProductQuery {
        ProductQuery {
            text: self.query.clone(),
            price_range: self.price_range,
            sort: self.sort,
            category: self.category.clone(),
        }
    }

    /// Apply one event and return the next state.
    pub fn reduce(mut self, event: ProductEvent) -> Self {
        tracing::trace!(?event, "product view event");

        match event {
            ProductEvent::Loaded(LoadOutcome::Loaded(products)) => {
                self.loading = false;
                self.error = None;
                self.products = products;
            }
            ProductEvent::Loaded(LoadOutcome::Failed(message)) => {
                self.loading = false;
                self.error = Some(message);
                self.products.clear();
            }
            ProductEvent::QueryChanged(query) => self.query = query,
            ProductEvent::PriceRangeChanged(range) => self.price_range = range,
            ProductEvent::SortChanged(sort) => self.sort = sort,
            ProductEvent::CategoryChanged(category) => self.category = category,
            ProductEvent::Reload => {
                self.loading = true;
                self.error = None;
                return self;
            }
        }

        self.filtered = self.product_query().apply(&self.products);
        self
    }

    /// Nothing to show because the fetch returned no products at all.
    pub fn is_empty_catalog(&self) -> bool {
        !self.loading && self.error.is_none() && self.products.is_empty()
    }

    /// Products exist but the current selections hide all of them.
    pub fn has_no_matches(&self) -> bool {
        !self.products.is_empty() && self.filtered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Price;
    use crate::search::PriceBracket;

    fn products() -> Vec<Product> {
        vec![
            Product::new("1", "Red Shoe", Price::new(1_500_000)).with_category("shoes"),
            Product::new("2", "Blue Shoe", Price::new(500_000)).with_category("shoes"),
            Product::new("3", "Red Hat", Price::new(750_000)).with_category("hats"),
        ]
    }

    fn loaded() -> ProductViewState {
        ProductViewState::new().reduce(ProductEvent::Loaded(LoadOutcome::Loaded(products())))
    }

    fn names(state: &ProductViewState) -> Vec<&str> {
        state.filtered.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ProductViewState::new();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.filtered.is_empty());
    }

    #[test]
    fn test_load_populates_filtered() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.filtered, products());
    }

    #[test]
    fn test_selections_before_load_apply_on_load() {
        let state = ProductViewState::new()
            .reduce(ProductEvent::QueryChanged("shoe".to_string()))
            .reduce(ProductEvent::SortChanged(SortOrder::LowestPriceFirst))
            .reduce(ProductEvent::Loaded(LoadOutcome::Loaded(products())));

        assert_eq!(names(&state), ["Blue Shoe", "Red Shoe"]);
    }

    #[test]
    fn test_every_selection_recomputes() {
        let state = loaded().reduce(ProductEvent::QueryChanged("RED".to_string()));
        assert_eq!(names(&state), ["Red Shoe", "Red Hat"]);

        let state = state.reduce(ProductEvent::PriceRangeChanged(Some(
            PriceBracket::From100KTo1M.range(),
        )));
        assert_eq!(names(&state), ["Red Hat"]);

        let state = state.reduce(ProductEvent::PriceRangeChanged(None));
        let state = state.reduce(ProductEvent::SortChanged(SortOrder::HighestPriceFirst));
        assert_eq!(names(&state), ["Red Shoe", "Red Hat"]);

        let state = state.reduce(ProductEvent::CategoryChanged(Some("hats".into())));
        assert_eq!(names(&state), ["Red Hat"]);
    }

    #[test]
    fn test_failed_load_is_distinct_from_empty() {
        let failed = ProductViewState::new()
            .reduce(ProductEvent::Loaded(LoadOutcome::Failed("HTTP 503".to_string())));
        assert_eq!(failed.error.as_deref(), Some("HTTP 503"));
        assert!(!failed.is_empty_catalog());

        let empty = ProductViewState::new().reduce(ProductEvent::Loaded(LoadOutcome::Loaded(vec![])));
        assert!(empty.error.is_none());
        assert!(empty.is_empty_catalog());
    }

    #[test]
    fn test_failure_clears_previous_products() {
        let state = loaded().reduce(ProductEvent::Loaded(LoadOutcome::Failed("timeout".to_string())));
        assert!(state.products.is_empty());
        assert!(state.filtered.is_empty());
    }

    #[test]
    fn test_reload_clears_error_and_keeps_selections() {
        let state = ProductViewState::new()
            .reduce(ProductEvent::QueryChanged("hat".to_string()))
            .reduce(ProductEvent::Loaded(LoadOutcome::Failed("offline".to_string())))
            .reduce(ProductEvent::Reload);

        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.query, "hat");

        let state = state.reduce(ProductEvent::Loaded(LoadOutcome::Loaded(products())));
        assert_eq!(names(&state), ["Red Hat"]);
    }

    #[test]
    fn test_no_matches() {
        let state = loaded().reduce(ProductEvent::QueryChanged("sandal".to_string()));
        assert!(state.has_no_matches());
        assert!(!state.is_empty_catalog());
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let events = vec![
            ProductEvent::Loaded(LoadOutcome::Loaded(products())),
            ProductEvent::QueryChanged("shoe".to_string()),
            ProductEvent::SortChanged(SortOrder::HighestPriceFirst),
        ];
        let run = || {
            events
                .iter()
                .cloned()
                .fold(ProductViewState::new(), ProductViewState::reduce)
        };
        assert_eq!(run(), run());
    }
}
