use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::InventoryService;
use crate::codes;
use crate::model::{Category, CreateCategory, UpdateCategory};

impl InventoryService {
    pub fn list_categories(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Category>, ServiceError> {
        ops::list(&self.categories, principal, &codes::category::LIST, query)
    }

    pub fn create_categories(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Category>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.categories,
            principal,
            &codes::category::CREATE,
            body,
            |c: CreateCategory| c.into_record(actor.clone()),
        )
    }

    pub fn get_category(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Category, ServiceError> {
        ops::get(&self.categories, principal, &codes::category::GET, id, query)
    }

    pub fn update_category(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Category, ServiceError> {
        ops::update::<Category, UpdateCategory>(
            &self.categories,
            principal,
            &codes::category::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_category(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Category, ServiceError> {
        ops::remove(
            &self.categories,
            principal,
            &codes::category::DELETE,
            id,
            query,
        )
    }
}
