use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Path, RawQuery, State},
    http::StatusCode,
    routing::get,
};

use minierp_core::{Principal, ServiceError, envelope};

use super::{AppState, created_envelope};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/permissions", get(list_permissions).post(create_permissions))
        .route(
            "/permissions/{id}",
            get(get_permission)
                .put(update_permission)
                .patch(update_permission)
                .delete(delete_permission),
        )
}

type ApiResult = Result<(StatusCode, Json<serde_json::Value>), ServiceError>;

async fn list_permissions(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_permissions(&principal, query.as_deref())?))
}

async fn create_permissions(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_permissions(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_permission(&principal, &id, query.as_deref())?))
}

async fn update_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_permission(
        &principal,
        &id,
        &body,
        query.as_deref(),
    )?))
}

async fn delete_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_permission(&principal, &id, query.as_deref())?))
}
