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
        .route("/users", get(list_users).post(create_users))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route(
            "/users/{id}/roles",
            get(list_user_roles).post(add_user_role).put(add_user_role),
        )
        .route(
            "/users/{id}/roles/{role_id}",
            get(get_user_role)
                .put(update_user_role)
                .patch(update_user_role)
                .delete(remove_user_role),
        )
}

type ApiResult = Result<(StatusCode, Json<serde_json::Value>), ServiceError>;

async fn list_users(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_users(&principal, query.as_deref())?))
}

async fn create_users(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_users(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_user(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_user(&principal, &id, query.as_deref())?))
}

async fn update_user(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_user(&principal, &id, &body, query.as_deref())?))
}

async fn delete_user(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_user(&principal, &id, query.as_deref())?))
}

async fn list_user_roles(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(envelope::ok(svc.user_roles(&principal, &id)?))
}

async fn add_user_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult {
    let record = svc.add_role_to_user(&principal, &id, &body)?;
    Ok(envelope::created(record))
}

async fn get_user_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, role_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.user_role(&principal, &id, &role_id)?))
}

async fn update_user_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, role_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_user_role(
        &principal,
        &id,
        &role_id,
        &body,
    )?))
}

async fn remove_user_role(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, role_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.remove_role_from_user(
        &principal,
        &id,
        &role_id,
    )?))
}
