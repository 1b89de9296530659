use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::Audit;

/// Join record granting one permission to one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermission {
    pub role_id: String,
    pub permission_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddRolePermission {
    #[validate(length(min = 1, max = 255))]
    pub permission_id: String,
    pub extra: Option<serde_json::Value>,
}

impl AddRolePermission {
    pub fn into_record(self, role_id: &str, created_by: Option<String>) -> RolePermission {
        RolePermission {
            role_id: role_id.to_string(),
            permission_id: self.permission_id,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRolePermission {
    pub extra: Option<serde_json::Value>,
}
