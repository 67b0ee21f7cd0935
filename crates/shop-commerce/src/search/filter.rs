//! Price range filters.

use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed price interval `[min, max]`.
///
/// An absent bound is open. A range whose `min` exceeds its `max` matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<Price>,
    pub max: Option<Price>,
}

impl PriceRange {
    pub fn new(min: Option<Price>, max: Option<Price>) -> Self {
        Self { min, max }
    }

    /// Both bounds set.
    pub fn between(min: i64, max: i64) -> Self {
        Self::new(Some(Price::new(min)), Some(Price::new(max)))
    }

    pub fn at_least(min: i64) -> Self {
        Self::new(Some(Price::new(min)), None)
    }

    pub fn at_most(max: i64) -> Self {
        Self::new(None, Some(Price::new(max)))
    }

    /// Build a range from user-entered text.
    ///
    /// A bound that does not parse as a number is dropped and left open.
    ///
    /// ```
    /// use shop_commerce::search::PriceRange;
    /// assert_eq!(PriceRange::from_bounds("abc", "500"), PriceRange::at_most(500));
    /// ```
    pub fn from_bounds(min: &str, max: &str) -> Self {
        Self::new(Price::parse(min), Price::parse(max))
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: Price) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    /// Neither bound set; matches every price.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{} - {}", min, max),
            (Some(min), None) => write!(f, "{} and up", min),
            (None, Some(max)) => write!(f, "up to {}", max),
            (None, None) => f.write_str("any price"),
        }
    }
}

/// The fixed price brackets offered by the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBracket {
    /// Rp100.000 - Rp1.000.000
    From100KTo1M,
    /// Rp1.000.000 - Rp2.000.000
    From1MTo2M,
    /// Rp2.000.000 - Rp3.000.000
    From2MTo3M,
    /// Rp3.000.000 - Rp4.000.000
    From3MTo4M,
    /// Rp4.000.000 - Rp5.000.000
    From4MTo5M,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 5] = [
        PriceBracket::From100KTo1M,
        PriceBracket::From1MTo2M,
        PriceBracket::From2MTo3M,
        PriceBracket::From3MTo4M,
        PriceBracket::From4MTo5M,
    ];

    pub fn bounds(&self) -> (i64, i64) {
        match self {
            PriceBracket::From100KTo1M => (100_000, 1_000_000),
            PriceBracket::From1MTo2M => (1_000_000, 2_000_000),
            PriceBracket::From2MTo3M => (2_000_000, 3_000_000),
            PriceBracket::From3MTo4M => (3_000_000, 4_000_000),
            PriceBracket::From4MTo5M => (4_000_000, 5_000_000),
        }
    }

    pub fn range(&self) -> PriceRange {
        let (min, max) = self.bounds();
        PriceRange::between(min, max)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBracket::From100KTo1M => "100k-1m",
            PriceBracket::From1MTo2M => "1m-2m",
            PriceBracket::From2MTo3M => "2m-3m",
            PriceBracket::From3MTo4M => "3m-4m",
            PriceBracket::From4MTo5M => "4m-5m",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

impl From<PriceBracket> for PriceRange {
    fn from(bracket: PriceBracket) -> Self {
        bracket.range()
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.range(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let range = PriceRange::between(100, 200);
        assert!(range.contains(Price::new(100)));
        assert!(range.contains(Price::new(150)));
        assert!(range.contains(Price::new(200)));
        assert!(!range.contains(Price::new(99)));
        assert!(!range.contains(Price::new(201)));
    }

    #[test]
    fn test_open_bounds() {
        assert!(PriceRange::at_least(10).contains(Price::new(i64::MAX)));
        assert!(PriceRange::at_most(10).contains(Price::new(-5)));
        assert!(PriceRange::default().contains(Price::new(0)));
        assert!(PriceRange::default().is_unbounded());
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = PriceRange::between(500, 100);
        assert!(!range.contains(Price::new(100)));
        assert!(!range.contains(Price::new(300)));
        assert!(!range.contains(Price::new(500)));
    }

    #[test]
    fn test_malformed_bounds_are_open() {
        assert_eq!(PriceRange::from_bounds("abc", "500"), PriceRange::at_most(500));
        assert_eq!(PriceRange::from_bounds("100", "lots"), PriceRange::at_least(100));
        assert!(PriceRange::from_bounds("", "x").is_unbounded());
        assert_eq!(PriceRange::from_bounds("1", "2"), PriceRange::between(1, 2));
    }

    #[test]
    fn test_bracket_ranges() {
        assert_eq!(
            PriceBracket::From100KTo1M.range(),
            PriceRange::between(100_000, 1_000_000)
        );
        assert_eq!(
            PriceBracket::From4MTo5M.range(),
            PriceRange::between(4_000_000, 5_000_000)
        );
    }

    #[test]
    fn test_bracket_labels_round_trip() {
        for bracket in PriceBracket::ALL {
            assert_eq!(PriceBracket::from_label(bracket.label()), Some(bracket));
        }
        assert_eq!(PriceBracket::from_label(" 1M-2M "), Some(PriceBracket::From1MTo2M));
        assert_eq!(PriceBracket::from_label("5m-6m"), None);
    }

    #[test]
    fn test_range_display() {
        assert_eq!(
            PriceBracket::From1MTo2M.to_string(),
            "Rp1.000.000 - Rp2.000.000"
        );
        assert_eq!(PriceRange::at_least(500).to_string(), "Rp500 and up");
        assert_eq!(PriceRange::default().to_string(), "any price");
    }
}
