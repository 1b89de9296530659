pub mod api;
pub mod codes;
pub mod model;
pub mod service;
mod store_impls;

use std::sync::Arc;

use axum::Router;
use minierp_core::Module;

use service::OrgService;

/// Org module — companies, departments, jobs.
pub struct OrgModule {
    service: Arc<OrgService>,
}

impl OrgModule {
    pub fn new(service: OrgService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for OrgModule {
    fn name(&self) -> &str {
        "org"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
