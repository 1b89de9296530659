use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Warehouse — a physical location holding items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,

    pub name: String,

    /// Owning company, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWarehouse {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub company_id: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateWarehouse {
    pub fn into_record(self, created_by: Option<String>) -> Warehouse {
        Warehouse {
            id: new_id(),
            name: self.name,
            company_id: self.company_id,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWarehouse {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub company_id: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}
