//! Product records.

use crate::ids::{BrandId, CategoryId, ProductId};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Field names follow the API's camelCase wire format. Every field is
/// optional on the wire: missing text decodes as `""` and a missing price
/// as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(rename = "productName")]
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (URL).
    pub image_url: String,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Brand of the product.
    pub brand_id: BrandId,
    /// Creation timestamp as served by the API.
    pub created_at: String,
    /// Last update timestamp as served by the API.
    pub updated_at: String,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = category_id.into();
        self
    }

    pub fn with_brand(mut self, brand_id: impl Into<BrandId>) -> Self {
        self.brand_id = brand_id.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Case-insensitive substring match against name and description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
