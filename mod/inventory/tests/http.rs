//! HTTP-level tests over the inventory router.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use inventory::api;
use inventory::codes;
use inventory::service::InventoryService;
use minierp_core::Principal;
use minierp_sql::SqliteStore;

fn app(principal: Principal) -> Router {
    let sql = SqliteStore::open_in_memory().unwrap();
    let service = InventoryService::new(Arc::new(sql)).unwrap();
    api::router(Arc::new(service)).layer(Extension(principal))
}

fn stockkeeper() -> Principal {
    let defs = [
        codes::item::LIST,
        codes::item::CREATE,
        codes::item::GET,
        codes::warehouse::CREATE,
        codes::warehouse::ITEMS,
        codes::warehouse::ADD_ITEM,
        codes::warehouse::GET_ITEM,
        codes::warehouse::UPDATE_ITEM,
    ];
    Principal::new(
        "stockkeeper",
        defs.iter().map(|d| d.permission.to_string()).collect(),
    )
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn item_crud_with_price_filter() {
    let app = app(stockkeeper());
    let (status, _) = send(
        &app,
        "POST",
        "/items",
        Some(r#"[{"name":"bolt","price":0.2},{"name":"beam","price":40.0}]"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // filter={"price":{"gt":1}}
    let uri = "/items?filter=%7B%22price%22%3A%7B%22gt%22%3A1%7D%7D";
    let (status, v) = send(&app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["total"], 1);
    assert_eq!(v["data"]["items"][0]["name"], "beam");
}

#[tokio::test]
async fn unknown_operator_is_rejected_with_validation_code() {
    let app = app(stockkeeper());
    // filter={"price":{"regex":"x"}}
    let uri = "/items?filter=%7B%22price%22%3A%7B%22regex%22%3A%22x%22%7D%7D";
    let (status, v) = send(&app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"]["code"], "C07H01-01");
}

#[tokio::test]
async fn warehouse_item_quantity_flow() {
    let app = app(stockkeeper());
    let (_, v) = send(&app, "POST", "/warehouses", Some(r#"{"name":"north"}"#)).await;
    let wid = v["data"]["id"].as_str().unwrap().to_string();

    let (status, v) = send(
        &app,
        "POST",
        &format!("/warehouses/{}/items", wid),
        Some(r#"{"item_id":"i1","quantity":12}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(v["data"]["quantity"], 12);

    let (status, v) = send(
        &app,
        "PATCH",
        &format!("/warehouses/{}/items/i1", wid),
        Some(r#"{"quantity":7}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["quantity"], 7);

    // The join key is pinned; a patch cannot re-home the record.
    let (_, v) = send(
        &app,
        "PATCH",
        &format!("/warehouses/{}/items/i1", wid),
        Some(r#"{"warehouse_id":"elsewhere"}"#),
    )
    .await;
    assert_eq!(v["data"]["warehouse_id"], wid.as_str());
}

#[tokio::test]
async fn stocks_require_their_own_permission() {
    let app = app(stockkeeper());
    let (status, v) = send(&app, "GET", "/stocks", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(v["error"]["code"], "C06H01-00");
}
