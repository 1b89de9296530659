//! HTTP surface for the org module.

pub mod companies;
pub mod departments;
pub mod jobs;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use serde::Serialize;

use minierp_core::envelope;

use crate::service::OrgService;

/// Shared application state.
pub type AppState = Arc<OrgService>;

/// Build the org API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(companies::routes())
        .merge(departments::routes())
        .merge(jobs::routes())
        .with_state(state)
}

pub(crate) type ApiResult = Result<(StatusCode, Json<serde_json::Value>), minierp_core::ServiceError>;

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
