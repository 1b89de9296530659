use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::InventoryService;
use crate::codes;
use crate::model::{CreateSupplier, Supplier, UpdateSupplier};

impl InventoryService {
    pub fn list_suppliers(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Supplier>, ServiceError> {
        ops::list(&self.suppliers, principal, &codes::supplier::LIST, query)
    }

    pub fn create_suppliers(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Supplier>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.suppliers,
            principal,
            &codes::supplier::CREATE,
            body,
            |c: CreateSupplier| c.into_record(actor.clone()),
        )
    }

    pub fn get_supplier(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Supplier, ServiceError> {
        ops::get(&self.suppliers, principal, &codes::supplier::GET, id, query)
    }

    pub fn update_supplier(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Supplier, ServiceError> {
        ops::update::<Supplier, UpdateSupplier>(
            &self.suppliers,
            principal,
            &codes::supplier::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_supplier(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Supplier, ServiceError> {
        ops::remove(
            &self.suppliers,
            principal,
            &codes::supplier::DELETE,
            id,
            query,
        )
    }
}
