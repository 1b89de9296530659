use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::Audit;

/// Join record placing a quantity of one item in one warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseItem {
    pub warehouse_id: String,
    pub item_id: String,

    /// On-hand quantity at this location.
    #[serde(default)]
    pub quantity: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddWarehouseItem {
    #[validate(length(min = 1, max = 255))]
    pub item_id: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub quantity: i64,
    pub extra: Option<serde_json::Value>,
}

impl AddWarehouseItem {
    pub fn into_record(self, warehouse_id: &str, created_by: Option<String>) -> WarehouseItem {
        WarehouseItem {
            warehouse_id: warehouse_id.to_string(),
            item_id: self.item_id,
            quantity: self.quantity,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWarehouseItem {
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
    pub extra: Option<serde_json::Value>,
}
