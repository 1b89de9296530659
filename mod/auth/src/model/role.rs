use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// Role — a named bundle of permissions granted to users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,

    /// Display name, unique by convention but not enforced.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form extra attributes, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRole {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateRole {
    pub fn into_record(self, created_by: Option<String>) -> Role {
        Role {
            id: new_id(),
            name: self.name,
            description: self.description,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

/// Patch schema for role updates; every field optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRole {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_fills_id_and_audit() {
        let role = CreateRole {
            name: "admin".into(),
            description: None,
            extra: None,
        }
        .into_record(Some("u1".into()));

        assert_eq!(role.id.len(), 32);
        assert_eq!(role.audit.created_by, Some("u1".into()));
        assert!(role.audit.deleted_at.is_none());
    }

    #[test]
    fn create_rejects_empty_name() {
        let payload = CreateRole {
            name: "".into(),
            description: None,
            extra: None,
        };
        assert!(payload.validate().is_err());
    }
}
