use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};
use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers of shape `C<NN>H<NN>-<NN>`:
// resource number, operation number, failure branch. Clients and tests
// match on these — never on the human-readable message string.

/// Identifies one operation on one resource.
///
/// Each module keeps an explicit constant table of these in its
/// `codes.rs`; the branch suffix is appended per failure gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCode {
    pub resource: u8,
    pub op: u8,
}

impl OpCode {
    pub const fn new(resource: u8, op: u8) -> Self {
        Self { resource, op }
    }

    /// Full error code for a failure branch of this operation.
    pub const fn branch(self, branch: u8) -> ErrorCode {
        ErrorCode {
            resource: self.resource,
            op: self.op,
            branch,
        }
    }
}

/// A stable per-branch error code.
///
/// Identical failure branch ⇒ identical code across requests. Codes
/// never change; messages may be reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    resource: u8,
    op: u8,
    branch: u8,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{:02}H{:02}-{:02}", self.resource, self.op, self.branch)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Each variant maps to one failure gate (authorization, validation,
/// lookup, action) and carries the operation's branch code. The JSON
/// response always includes message, status and code:
///
/// ```json
/// {"data": null, "error": {"message": "...", "status": 404, "code": "C01H03-03"}}
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller's token lacks the required permission string. HTTP 403.
    #[error("{message}")]
    Forbidden { code: ErrorCode, message: String },

    /// Request params/query/body failed schema validation. HTTP 400.
    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    /// Addressed resource or association member does not exist. HTTP 404.
    #[error("{message}")]
    NotFound { code: ErrorCode, message: String },

    /// Storage backend failure at lookup or action time. HTTP 500.
    #[error("{message}")]
    Backend { code: ErrorCode, message: String },
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Forbidden { code, .. }
            | ServiceError::Validation { code, .. }
            | ServiceError::NotFound { code, .. }
            | ServiceError::Backend { code, .. } => *code,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ServiceError::Validation { .. } => StatusCode::BAD_REQUEST,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "data": null,
            "error": {
                "message": self.to_string(),
                "status": status.as_u16(),
                "code": self.code(),
            },
        });
        (status, axum::Json(body)).into_response()
    }
}
