use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::InventoryService;
use crate::codes;
use crate::model::{CreateType, Type, UpdateType};

impl InventoryService {
    pub fn list_types(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Type>, ServiceError> {
        ops::list(&self.types, principal, &codes::typ::LIST, query)
    }

    pub fn create_types(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Type>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.types,
            principal,
            &codes::typ::CREATE,
            body,
            |c: CreateType| c.into_record(actor.clone()),
        )
    }

    pub fn get_type(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Type, ServiceError> {
        ops::get(&self.types, principal, &codes::typ::GET, id, query)
    }

    pub fn update_type(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Type, ServiceError> {
        ops::update::<Type, UpdateType>(
            &self.types,
            principal,
            &codes::typ::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_type(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Type, ServiceError> {
        ops::remove(&self.types, principal, &codes::typ::DELETE, id, query)
    }
}
