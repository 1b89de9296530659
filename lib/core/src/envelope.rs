//! Success-side response envelope helpers.
//!
//! The wire contract is `{"data": ..., "error": null}` on success and
//! `{"data": null, "error": {...}}` on failure (the failure half lives
//! in [`crate::error::ServiceError`]'s `IntoResponse`).

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// 200 OK with the data envelope.
pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, body(data))
}

/// 201 Created with the data envelope.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::CREATED, body(data))
}

fn body<T: Serialize>(data: T) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "data": data,
        "error": null,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let (status, Json(v)) = created(serde_json::json!({"name": "demo"}));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(v["data"]["name"], "demo");
        assert!(v["error"].is_null());
    }
}
