use axum::{
    Router,
    body::Bytes,
    extract::{Extension, Path, RawQuery, State},
    routing::get,
};

use minierp_core::{Principal, envelope};

use super::{ApiResult, AppState, created_envelope};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_suppliers))
        .route(
            "/suppliers/{id}",
            get(get_supplier)
                .put(update_supplier)
                .patch(update_supplier)
                .delete(delete_supplier),
        )
}

async fn list_suppliers(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_suppliers(&principal, query.as_deref())?))
}

async fn create_suppliers(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_suppliers(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_supplier(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_supplier(&principal, &id, query.as_deref())?))
}

async fn update_supplier(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_supplier(
        &principal,
        &id,
        &body,
        query.as_deref(),
    )?))
}

async fn delete_supplier(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_supplier(&principal, &id, query.as_deref())?))
}
