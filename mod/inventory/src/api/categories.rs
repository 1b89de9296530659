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
        .route("/categories", get(list_categories).post(create_categories))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .patch(update_category)
                .delete(delete_category),
        )
}

async fn list_categories(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.list_categories(&principal, query.as_deref())?))
}

async fn create_categories(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    body: Bytes,
) -> ApiResult {
    let (records, single) = svc.create_categories(&principal, &body)?;
    Ok(created_envelope(records, single))
}

async fn get_category(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.get_category(&principal, &id, query.as_deref())?))
}

async fn update_category(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> ApiResult {
    Ok(envelope::ok(svc.update_category(
        &principal,
        &id,
        &body,
        query.as_deref(),
    )?))
}

async fn delete_category(
    State(svc): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    Ok(envelope::ok(svc.delete_category(&principal, &id, query.as_deref())?))
}
