//! HTTP surface for the auth module.
//!
//! Write handlers take the raw body as [`Bytes`] so the authorization
//! gate runs before any JSON parsing; parse failures must surface as
//! the operation's validation branch, not a framework-level rejection.

pub mod permissions;
pub mod roles;
pub mod users;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use serde::Serialize;

use minierp_core::envelope;

use crate::service::AuthService;

/// Shared application state.
pub type AppState = Arc<AuthService>;

/// Build the auth API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(roles::routes())
        .merge(permissions::routes())
        .merge(users::routes())
        .with_state(state)
}

/// 201 envelope for creates: single requests echo the object, bulk
/// requests echo the array.
pub(crate) fn created_envelope<T: Serialize>(
    mut records: Vec<T>,
    single: bool,
) -> (StatusCode, Json<serde_json::Value>) {
    if single {
        envelope::created(records.remove(0))
    } else {
        envelope::created(records)
    }
}
