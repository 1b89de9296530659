use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Item — a sellable/stockable article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,

    pub name: String,

    /// Owning category, if classified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Unit price; zero when unpriced.
    #[serde(default)]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub category_id: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateItem {
    pub fn into_record(self, created_by: Option<String>) -> Item {
        Item {
            id: new_id(),
            name: self.name,
            category_id: self.category_id,
            price: self.price,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub category_id: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_is_rejected() {
        let bad = CreateItem {
            name: "bolt".into(),
            category_id: None,
            price: -1.0,
            description: None,
            extra: None,
        };
        assert!(bad.validate().is_err());
    }
}
