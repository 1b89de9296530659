use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::Audit;

/// Join record tagging one item with one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemType {
    pub item_id: String,
    pub type_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddItemType {
    #[validate(length(min = 1, max = 255))]
    pub type_id: String,
    pub extra: Option<serde_json::Value>,
}

impl AddItemType {
    pub fn into_record(self, item_id: &str, created_by: Option<String>) -> ItemType {
        ItemType {
            item_id: item_id.to_string(),
            type_id: self.type_id,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemType {
    pub extra: Option<serde_json::Value>,
}
