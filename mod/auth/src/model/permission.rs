use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Permission — one grantable capability, matched by exact name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,

    /// The permission string (e.g. "get roles").
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePermission {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreatePermission {
    pub fn into_record(self, created_by: Option<String>) -> Permission {
        Permission {
            id: new_id(),
            name: self.name,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePermission {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}
