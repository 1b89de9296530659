use serde::{Deserialize, Serialize};
use validator::Validate;

use minierp_core::{Audit, new_id};

/// User — an account that can hold roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(flatten)]
    pub audit: Audit,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(email)]
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl CreateUser {
    pub fn into_record(self, created_by: Option<String>) -> User {
        User {
            id: new_id(),
            username: self.username,
            email: self.email,
            display_name: self.display_name,
            extra: self.extra,
            audit: Audit::now(created_by),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub extra: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_checked_when_present() {
        let ok = CreateUser {
            username: "ada".into(),
            email: Some("ada@example.com".into()),
            display_name: None,
            extra: None,
        };
        assert!(ok.validate().is_ok());

        let bad = CreateUser {
            username: "ada".into(),
            email: Some("not-an-email".into()),
            display_name: None,
            extra: None,
        };
        assert!(bad.validate().is_err());
    }
}
