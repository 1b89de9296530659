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
        .route("/types", get(list_types).post(create_types))
        .route(
            "/types/{id}",
            get(get_type)
                .put(update_type)
                .patch(update_type)
                .delete(delete_type),
        )
}

async fn list_types(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_types(&principal, query.as_deref())?))
}

async fn create_types(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_types(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_type(&principal, &id, query.as_deref())?))
}

async fn update_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_type(&principal, &id, &body, query.as_deref())?))
}

async fn delete_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_type(&principal, &id, query.as_deref())?))
}
