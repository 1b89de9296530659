pub mod schema;

mod category;
mod item;
mod stock;
mod supplier;
mod types;
mod warehouse;

use std::sync::Arc;

use minierp_sql::{SQLError, SQLStore};
use minierp_store::{AssocRepository, Repository};

use crate::model::{
    Category, Item, ItemType, Stock, Supplier, Type, Warehouse, WarehouseItem,
};

/// Inventory service — one repository per resource plus the two join
/// tables. Operations live in the sibling files, one per resource.
pub struct InventoryService {
    pub(crate) categories: Repository<Category>,
    pub(crate) types: Repository<Type>,
    pub(crate) stocks: Repository<Stock>,
    pub(crate) items: Repository<Item>,
    pub(crate) warehouses: Repository<Warehouse>,
    pub(crate) suppliers: Repository<Supplier>,
    pub(crate) item_types: AssocRepository<ItemType>,
    pub(crate) warehouse_items: AssocRepository<WarehouseItem>,
}

impl InventoryService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, SQLError> {
        schema::init_schema(sql.as_ref())?;
        tracing::debug!("inventory schema ready");
        Ok(Self {
            categories: Repository::new(sql.clone()),
            types: Repository::new(sql.clone()),
            stocks: Repository::new(sql.clone()),
            items: Repository::new(sql.clone()),
            warehouses: Repository::new(sql.clone()),
            suppliers: Repository::new(sql.clone()),
            item_types: AssocRepository::new(sql.clone()),
            warehouse_items: AssocRepository::new(sql),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use minierp_core::Principal;
    use minierp_sql::SqliteStore;

    pub fn service() -> InventoryService {
        let sql = SqliteStore::open_in_memory().unwrap();
        InventoryService::new(Arc::new(sql)).unwrap()
    }

    pub fn principal(sub: &str, defs: &[minierp_store::OpDef]) -> Principal {
        Principal::new(
            sub,
            defs.iter().map(|d| d.permission.to_string()).collect(),
        )
    }

    /// URL-encode a filter JSON object into a query string.
    pub fn filter_query(json: &str) -> String {
        serde_urlencoded::to_string([("filter", json)]).unwrap()
    }
}
