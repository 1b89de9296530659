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
        .route("/roles", get(list_roles).post(create_roles))
        .route(
            "/roles/{id}",
            get(get_role)
                .put(update_role)
                .patch(update_role)
                .delete(delete_role),
        )
        .route(
            "/roles/{id}/permissions",
            get(list_role_permissions)
                .post(add_role_permission)
                .put(add_role_permission),
        )
        .route(
            "/roles/{id}/permissions/{permission_id}",
            get(get_role_permission)
                .put(update_role_permission)
                .patch(update_role_permission)
                .delete(remove_role_permission),
        )
}

type ApiResult = Result<(StatusCode, Json<serde_json::Value>), ServiceError>;

async fn list_roles(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_roles(&principal, query.as_deref())?))
}

async fn create_roles(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_roles(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_role(&principal, &id, query.as_deref())?))
}

async fn update_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_role(&principal, &id, &body, query.as_deref())?))
}

async fn delete_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_role(&principal, &id, query.as_deref())?))
}

async fn list_role_permissions(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(envelope::ok(svc.role_permissions(&principal, &id)?))
}

async fn add_role_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult {
    let record = svc.add_permission_to_role(&principal, &id, &body)?;
    Ok(envelope::created(record))
}

async fn get_role_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, permission_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.role_permission(
        &principal,
        &id,
        &permission_id,
    )?))
}

async fn update_role_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, permission_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_role_permission(
        &principal,
        &id,
        &permission_id,
        &body,
    )?))
}

async fn remove_role_permission(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, permission_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.remove_permission_from_role(
        &principal,
        &id,
        &permission_id,
    )?))
}
