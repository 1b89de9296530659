//! HTTP surface for the inventory module.
//!
//! Write handlers take the raw body as [`Bytes`] so the authorization
//! gate runs before any JSON parsing.

pub mod categories;
pub mod items;
pub mod stocks;
pub mod suppliers;
pub mod types;
pub mod warehouses;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use serde::Serialize;

use minierp_core::envelope;

use crate::service::InventoryService;

/// Shared application state.
pub type AppState = Arc<InventoryService>;

/// Build the inventory API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(categories::routes())
        .merge(types::routes())
        .merge(stocks::routes())
        .merge(items::routes())
        .merge(warehouses::routes())
        .merge(suppliers::routes())
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
