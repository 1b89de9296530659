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
        .route("/warehouses", get(list_warehouses).post(create_warehouses))
        .route(
            "/warehouses/{id}",
            get(get_warehouse)
                .put(update_warehouse)
                .patch(update_warehouse)
                .delete(delete_warehouse),
        )
        .route(
            "/warehouses/{id}/items",
            get(list_warehouse_items)
                .post(add_warehouse_item)
                .put(add_warehouse_item),
        )
        .route(
            "/warehouses/{id}/items/{item_id}",
            get(get_warehouse_item)
                .put(update_warehouse_item)
                .patch(update_warehouse_item)
                .delete(remove_warehouse_item),
        )
}

async fn list_warehouses(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_warehouses(&principal, query.as_deref())?))
}

async fn create_warehouses(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_warehouses(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_warehouse(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_warehouse(&principal, &id, query.as_deref())?))
}

async fn update_warehouse(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_warehouse(
        &principal,
        &id,
        &body,
        query.as_deref(),
    )?))
}

async fn delete_warehouse(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_warehouse(&principal, &id, query.as_deref())?))
}

async fn list_warehouse_items(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(envelope::ok(svc.warehouse_items(&principal, &id)?))
}

async fn add_warehouse_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult {
    let record = svc.add_item_to_warehouse(&principal, &id, &body)?;
    Ok(envelope::created(record))
}

async fn get_warehouse_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.warehouse_item(&principal, &id, &item_id)?))
}

async fn update_warehouse_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, item_id)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_warehouse_item(
        &principal,
        &id,
        &item_id,
        &body,
    )?))
}

async fn remove_warehouse_item(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult {
    Ok(envelope::ok(svc.remove_item_from_warehouse(
        &principal,
        &id,
        &item_id,
    )?))
}
