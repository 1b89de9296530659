use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::Audit;

/// Join record assigning one role to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: String,
    pub role_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddUserRole {
    #[validate(length(min = 1, max = 255))]
    pub role_id: String,
    pub extra: Option<serde_json::Value>,
}

impl AddUserRole {
    pub fn into_record(self, user_id: &str, created_by: Option<String>) -> UserRole {
        UserRole {
            user_id: user_id.to_string(),
            role_id: self.role_id,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRole {
    pub extra: Option<serde_json::Value>,
}
