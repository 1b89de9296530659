use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Department — a unit within a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,

    pub name: String,

    /// Owning company, if attached.
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
pub struct CreateDepartment {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub company_id: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateDepartment {
    pub fn into_record(self, created_by: Option<String>) -> Department {
        Department {
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
pub struct UpdateDepartment {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub company_id: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}
