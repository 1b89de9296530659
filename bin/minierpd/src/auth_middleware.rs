//! JWT verification middleware.
//!
//! Extracts the token from `Authorization: Bearer <token>`, verifies
//! it, and stores a [`Principal`] in request extensions for the module
//! handlers. Tokens are issued elsewhere; this service only verifies.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use minierp_core::Principal;

/// JWT claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id.
    pub sub: String,

    /// Permission strings granted to this token.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Issued at (unix timestamp).
    pub iat: i64,

    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Shared JWT configuration for the middleware.
#[derive(Clone)]
pub struct JwtState {
    pub decoding_key: DecodingKey,
    pub validation: Validation,
}

impl JwtState {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

/// Authentication failure: missing or invalid token. Uses the same
/// `{"data": null, "error": ...}` envelope as the service errors but
/// carries no operation code, since no operation was reached.
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "missing authorization token".to_string(),
            AuthError::InvalidToken(e) => format!("invalid token: {}", e),
        };
        let body = serde_json::json!({
            "data": null,
            "error": {
                "message": message,
                "status": StatusCode::UNAUTHORIZED.as_u16(),
                "code": null,
            },
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

/// Middleware verifying the JWT and injecting the caller's
/// [`Principal`]. Public paths pass through unauthenticated.
pub async fn auth_middleware(
    State(jwt_state): State<Arc<JwtState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if is_public_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    let token_data =
        jsonwebtoken::decode::<Claims>(token, &jwt_state.decoding_key, &jwt_state.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    let claims = token_data.claims;
    request
        .extensions_mut()
        .insert(Principal::new(claims.sub, claims.permissions));

    Ok(next.run(request).await)
}

fn is_public_path(path: &str) -> bool {
    matches!(path, "/health" | "/version")
}
