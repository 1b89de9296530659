//! HTTP-level tests over the org router: envelope shape, status codes
//! and stable error codes as a client would see them.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use minierp_core::Principal;
use minierp_sql::SqliteStore;
use org::api;
use org::codes;
use org::service::OrgService;

fn app(principal: Principal) -> Router {
    let sql = SqliteStore::open_in_memory().unwrap();
    let service = OrgService::new(Arc::new(sql)).unwrap();
    api::router(Arc::new(service)).layer(Extension(principal))
}

fn hr() -> Principal {
    let defs = [
        codes::company::LIST,
        codes::company::CREATE,
        codes::company::GET,
        codes::company::DELETE,
        codes::department::LIST,
        codes::department::CREATE,
        codes::job::LIST,
        codes::job::CREATE,
        codes::job::UPDATE,
    ];
    Principal::new(
        "hr",
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
async fn create_and_fetch_company() {
    let app = app(hr());

    let (status, v) = send(&app, "POST", "/companies", Some(r#"{"name":"acme"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(v["data"]["name"], "acme");
    assert!(v["error"].is_null());
    let id = v["data"]["id"].as_str().unwrap().to_string();

    let (status, v) = send(&app, "GET", &format!("/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["created_by"], "hr");
}

#[tokio::test]
async fn forbidden_carries_the_operation_code() {
    let app = app(Principal::default());
    let (status, v) = send(&app, "POST", "/departments", Some(r#"{"name":"eng"}"#)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(v["data"].is_null());
    assert_eq!(v["error"]["code"], "C11H02-00");
}

#[tokio::test]
async fn malformed_query_gets_the_validation_envelope() {
    let app = app(hr());
    let (status, v) = send(&app, "GET", "/jobs?limit=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v["data"].is_null());
    assert_eq!(v["error"]["code"], "C12H01-01");
}

#[tokio::test]
async fn list_jobs_filtered_by_department() {
    let app = app(hr());
    send(
        &app,
        "POST",
        "/jobs",
        Some(r#"[{"name":"welder","department_id":"d1"},{"name":"clerk","department_id":"d2"}]"#),
    )
    .await;

    // filter={"department_id":"d1"}
    let uri = "/jobs?filter=%7B%22department_id%22%3A%22d1%22%7D";
    let (status, v) = send(&app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["total"], 1);
    assert_eq!(v["data"]["items"][0]["name"], "welder");
}

#[tokio::test]
async fn patch_job_is_merge_patch() {
    let app = app(hr());
    let (_, v) = send(
        &app,
        "POST",
        "/jobs",
        Some(r#"{"name":"welder","description":"mig"}"#),
    )
    .await;
    let id = v["data"]["id"].as_str().unwrap().to_string();

    let (status, v) = send(
        &app,
        "PATCH",
        &format!("/jobs/{}", id),
        Some(r#"{"name":"senior welder"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["name"], "senior welder");
    assert_eq!(v["data"]["description"], "mig");
}
