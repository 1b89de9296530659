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
        .route("/stocks", get(list_stocks).post(create_stocks))
        .route(
            "/stocks/{id}",
            get(get_stock)
                .put(update_stock)
                .patch(update_stock)
                .delete(delete_stock),
        )
}

async fn list_stocks(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_stocks(&principal, query.as_deref())?))
}

async fn create_stocks(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_stocks(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_stock(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_stock(&principal, &id, query.as_deref())?))
}

async fn update_stock(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_stock(&principal, &id, &body, query.as_deref())?))
}

async fn delete_stock(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_stock(&principal, &id, query.as_deref())?))
}
