use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Category — groups items for navigation and filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateCategory {
    pub fn into_record(self, created_by: Option<String>) -> Category {
        Category {
            id: new_id(),
            name: self.name,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}
