//! Permission principal + the authorization gate.
//!
//! Tokens are issued elsewhere; this layer only reads the permission
//! strings the binary's JWT middleware decoded for the request.

use serde::{Deserialize, Serialize};

use crate::error::{OpCode, ServiceError};

/// The authenticated caller: an opaque subject plus the set of
/// permission strings its token grants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier from the token (may be empty).
    #[serde(default)]
    pub sub: String,

    /// Permission strings. One static string gates exactly one
    /// operation; matching is exact, with no wildcards or hierarchy.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Principal {
    pub fn new(sub: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            sub: sub.into(),
            permissions,
        }
    }

    /// Exact-match membership check.
    pub fn has(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// The subject as an audit attribution, if present.
    pub fn actor(&self) -> Option<String> {
        if self.sub.is_empty() {
            None
        } else {
            Some(self.sub.clone())
        }
    }
}

/// The authorization gate. Always runs first: an unauthorized caller
/// gets 403 and the operation's `-00` code even for a malformed request.
pub fn authorize(
    principal: &Principal,
    required: &str,
    op: OpCode,
) -> Result<(), ServiceError> {
    if principal.has(required) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden {
            code: op.branch(0),
            message: format!("missing permission `{}`", required),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        let p = Principal::new("u1", vec!["get roles".into()]);
        assert!(p.has("get roles"));
        assert!(!p.has("get role"));
        assert!(!p.has("GET ROLES"));
    }

    #[test]
    fn authorize_branch_zero() {
        let p = Principal::default();
        let err = authorize(&p, "create roles", OpCode::new(1, 2)).unwrap_err();
        assert_eq!(err.code().to_string(), "C01H02-00");
        assert_eq!(err.status_code().as_u16(), 403);

        let p = Principal::new("u1", vec!["create roles".into()]);
        assert!(authorize(&p, "create roles", OpCode::new(1, 2)).is_ok());
    }

    #[test]
    fn actor_empty_sub_is_none() {
        assert_eq!(Principal::default().actor(), None);
        assert_eq!(Principal::new("u1", vec![]).actor(), Some("u1".into()));
    }
}
