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
        .route("/items", get(list_items).post(create_items))
        .route(
            "/items/{id}",
            get(get_item)
                .put(update_item)
                .patch(update_item)
                .delete(delete_item),
        )
        .route(
            "/items/{id}/types",
            get(list_item_types).post(add_item_type).put(add_item_type),
        )
        .route(
            "/items/{id}/types/{type_id}",
            get(get_item_type)
                .put(update_item_type)
                .patch(update_item_type)
                .delete(remove_item_type),
        )
}

async fn list_items(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_items(&principal, query.as_deref())?))
}

async fn create_items(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_items(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_item(&principal, &id, query.as_deref())?))
}

async fn update_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_item(&principal, &id, &body, query.as_deref())?))
}

async fn delete_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_item(&principal, &id, query.as_deref())?))
}

async fn list_item_types(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(envelope::ok(svc.item_types(&principal, &id)?))
}

async fn add_item_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult {
    let record = svc.add_type_to_item(&principal, &id, &body)?;
    Ok(envelope::created(record))
}

async fn get_item_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, type_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.item_type(&principal, &id, &type_id)?))
}

async fn update_item_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, type_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_item_type(
        &principal,
        &id,
        &type_id,
        &body,
    )?))
}

async fn remove_item_type(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, type_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.remove_type_from_item(
        &principal,
        &id,
        &type_id,
    )?))
}
