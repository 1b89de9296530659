use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Job — a position within a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,

    pub name: String,

    /// Owning department, if attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJob {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub department_id: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateJob {
    pub fn into_record(self, created_by: Option<String>) -> Job {
        Job {
            id: new_id(),
            name: self.name,
            department_id: self.department_id,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJob {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub department_id: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}
