use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::InventoryService;
use crate::codes;
use crate::model::{
    AddWarehouseItem, CreateWarehouse, UpdateWarehouse, UpdateWarehouseItem, Warehouse,
    WarehouseItem,
};

impl InventoryService {
    pub fn list_warehouses(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Warehouse>, ServiceError> {
        ops::list(&self.warehouses, principal, &codes::warehouse::LIST, query)
    }

    pub fn create_warehouses(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Warehouse>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.warehouses,
            principal,
            &codes::warehouse::CREATE,
            body,
            |c: CreateWarehouse| c.into_record(actor.clone()),
        )
    }

    pub fn get_warehouse(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Warehouse, ServiceError> {
        ops::get(&self.warehouses, principal, &codes::warehouse::GET, id, query)
    }

    pub fn update_warehouse(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Warehouse, ServiceError> {
        ops::update::<Warehouse, UpdateWarehouse>(
            &self.warehouses,
            principal,
            &codes::warehouse::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_warehouse(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Warehouse, ServiceError> {
        ops::remove(
            &self.warehouses,
            principal,
            &codes::warehouse::DELETE,
            id,
            query,
        )
    }

    pub fn warehouse_items(
        &self,
        principal: &Principal,
        warehouse_id: &str,
    ) -> Result<Vec<WarehouseItem>, ServiceError> {
        ops::assoc_list(
            &self.warehouses,
            &self.warehouse_items,
            principal,
            &codes::warehouse::ITEMS,
            warehouse_id,
        )
    }

    pub fn add_item_to_warehouse(
        &self,
        principal: &Principal,
        warehouse_id: &str,
        body: &[u8],
    ) -> Result<WarehouseItem, ServiceError> {
        let actor = principal.actor();
        ops::assoc_add(
            &self.warehouses,
            &self.warehouse_items,
            principal,
            &codes::warehouse::ADD_ITEM,
            warehouse_id,
            body,
            |c: AddWarehouseItem| c.into_record(warehouse_id, actor),
        )
    }

    pub fn warehouse_item(
        &self,
        principal: &Principal,
        warehouse_id: &str,
        item_id: &str,
    ) -> Result<WarehouseItem, ServiceError> {
        ops::assoc_get(
            &self.warehouses,
            &self.warehouse_items,
            principal,
            &codes::warehouse::GET_ITEM,
            warehouse_id,
            item_id,
        )
    }

    pub fn update_warehouse_item(
        &self,
        principal: &Principal,
        warehouse_id: &str,
        item_id: &str,
        body: &[u8],
    ) -> Result<WarehouseItem, ServiceError> {
        ops::assoc_update::<Warehouse, WarehouseItem, UpdateWarehouseItem>(
            &self.warehouses,
            &self.warehouse_items,
            principal,
            &codes::warehouse::UPDATE_ITEM,
            warehouse_id,
            item_id,
            body,
        )
    }

    pub fn remove_item_from_warehouse(
        &self,
        principal: &Principal,
        warehouse_id: &str,
        item_id: &str,
    ) -> Result<WarehouseItem, ServiceError> {
        ops::assoc_remove(
            &self.warehouses,
            &self.warehouse_items,
            principal,
            &codes::warehouse::REMOVE_ITEM,
            warehouse_id,
            item_id,
        )
    }
}
