pub mod api;
pub mod codes;
pub mod model;
pub mod service;
mod store_impls;

use std::sync::Arc;

use axum::Router;
use minierp_core::Module;

use service::AuthService;

/// Auth module — roles, permissions, users and their links.
pub struct AuthModule {
    service: Arc<AuthService>,
}

impl AuthModule {
    pub fn new(service: AuthService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for AuthModule {
    fn name(&self) -> &str {
        "auth"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
