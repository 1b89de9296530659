use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Supplier — an external source of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,

    pub name: String,

    /// Free-form contact line (address, phone, email).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSupplier {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateSupplier {
    pub fn into_record(self, created_by: Option<String>) -> Supplier {
        Supplier {
            id: new_id(),
            name: self.name,
            contact: self.contact,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSupplier {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}
