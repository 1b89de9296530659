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
        .route("/departments", get(list_departments).post(create_departments))
        .route(
            "/departments/{id}",
            get(get_department)
                .put(update_department)
                .patch(update_department)
                .delete(delete_department),
        )
}

async fn list_departments(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_departments(&principal, query.as_deref())?))
}

async fn create_departments(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_departments(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_department(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_department(&principal, &id, query.as_deref())?))
}

async fn update_department(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_department(
        &principal,
        &id,
        &body,
        query.as_deref(),
    )?))
}

async fn delete_department(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_department(&principal, &id, query.as_deref())?))
}
