pub mod api;
pub mod codes;
pub mod model;
pub mod service;
mod store_impls;

use std::sync::Arc;

use axum::Router;
use minierp_core::Module;

use service::InventoryService;

/// Inventory module — categories, types, stocks, items, warehouses,
/// suppliers and their links.
pub struct InventoryModule {
    service: Arc<InventoryService>,
}

impl InventoryModule {
    pub fn new(service: InventoryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl Module for InventoryModule {
    fn name(&self) -> &str {
        "inventory"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
