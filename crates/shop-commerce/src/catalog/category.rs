//! Category records.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_api_json() {
        let json = r#"{"id": "c-2", "name": "Sneakers", "imageUrl": "https://cdn/s.png"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "c-2");
        assert_eq!(category.name, "Sneakers");
        assert_eq!(category.created_at, "");
    }
}
