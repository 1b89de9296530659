//! Route registration — collects all module routes + system endpoints.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::auth_middleware::{self, JwtState};

/// Build the complete router with all routes.
///
/// Module routers are already `Router<()>` (each module attached its
/// own state); they get nested under `/{module_name}`. The JWT
/// middleware wraps everything, with `/health` and `/version` allowed
/// through unauthenticated.
pub fn build_router(jwt_state: Arc<JwtState>, module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    for (name, router) in module_routes {
        app = app.nest(&format!("/{}", name), router);
    }

    app.layer(middleware::from_fn_with_state(
        jwt_state,
        auth_middleware::auth_middleware,
    ))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "minierpd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use minierp_core::Module;
    use tower::ServiceExt;

    use crate::auth_middleware::Claims;

    const SECRET: &str = "test-secret";

    fn app() -> Router {
        let sql: Arc<dyn minierp_sql::SQLStore> =
            Arc::new(minierp_sql::SqliteStore::open_in_memory().unwrap());

        let auth_module =
            auth::AuthModule::new(auth::service::AuthService::new(Arc::clone(&sql)).unwrap());
        let inventory_module = inventory::InventoryModule::new(
            inventory::service::InventoryService::new(Arc::clone(&sql)).unwrap(),
        );
        let org_module =
            org::OrgModule::new(org::service::OrgService::new(Arc::clone(&sql)).unwrap());

        let module_routes = vec![
            (auth_module.name(), auth_module.routes()),
            (inventory_module.name(), inventory_module.routes()),
            (org_module.name(), org_module.routes()),
        ];
        build_router(Arc::new(JwtState::new(SECRET)), module_routes)
    }

    fn token(permissions: &[&str]) -> String {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = Claims {
            sub: "tester".into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            iat: now,
            exp: now + 3600,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn module_routes_require_a_token() {
        let response = app()
            .oneshot(Request::get("/auth/roles").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert!(body["data"].is_null());
        assert_eq!(body["error"]["status"], 401);
    }

    #[tokio::test]
    async fn token_permissions_flow_through_to_the_modules() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::get("/auth/roles")
                    .header(
                        header::AUTHORIZATION,
                        format!("Bearer {}", token(&["get roles"])),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["total"], 0);

        // Same token, no company permission: forbidden with the
        // operation's own code.
        let response = app
            .oneshot(
                Request::post("/org/companies")
                    .header(
                        header::AUTHORIZATION,
                        format!("Bearer {}", token(&["get roles"])),
                    )
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name": "acme"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "C10H02-00");
    }

    #[tokio::test]
    async fn create_through_the_full_stack() {
        let response = app()
            .oneshot(
                Request::post("/inventory/categories")
                    .header(
                        header::AUTHORIZATION,
                        format!("Bearer {}", token(&["create categories"])),
                    )
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name": "tools"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "tools");
        assert_eq!(body["data"]["created_by"], "tester");
    }
}
