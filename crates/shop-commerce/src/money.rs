//! Price type for catalog and cart amounts.
//!
//! The shop API quotes prices in whole Rupiah. Amounts are kept as `i64`
//! so comparisons and sums are exact. Decoding is lenient because the API
//! has served prices as integers, floats and numeric strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul};

/// Currency symbol used when displaying prices.
pub const CURRENCY_SYMBOL: &str = "Rp";

/// A price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse user-entered text into a price.
    ///
    /// Accepts an integer or a decimal (rounded). Returns `None` for empty,
    /// non-numeric or non-finite input.
    ///
    /// ```
    /// use shop_commerce::money::Price;
    /// assert_eq!(Price::parse(" 1500000 "), Some(Price::new(1_500_000)));
    /// assert_eq!(Price::parse("99.6"), Some(Price::new(100)));
    /// assert_eq!(Price::parse("abc"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(amount) = text.parse::<i64>() {
            return Some(Self(amount));
        }
        text.parse::<f64>().ok().and_then(Self::from_f64)
    }

    /// Round a floating point amount, rejecting NaN, infinities and values
    /// outside the `i64` range.
    pub fn from_f64(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let rounded = amount.round();
        if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
            return None;
        }
        Some(Self(rounded as i64))
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    pub fn saturating_mul(self, factor: i64) -> Price {
        Price(self.0.saturating_mul(factor))
    }

    /// Format with thousands separators, e.g. `Rp1.250.000`.
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without the symbol, e.g. `1.250.000`.
    pub fn display_amount(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        self.saturating_add(other)
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, factor: i64) -> Price {
        self.saturating_mul(factor)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match RawPrice::deserialize(deserializer)? {
            RawPrice::Int(amount) => Ok(Price(amount)),
            RawPrice::Float(amount) => Price::from_f64(amount)
                .ok_or_else(|| D::Error::custom(format!("price out of range: {}", amount))),
            RawPrice::Text(text) => Price::parse(&text)
                .ok_or_else(|| D::Error::custom(format!("invalid price: {:?}", text))),
        }
    }
}
