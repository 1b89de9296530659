use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::InventoryService;
use crate::codes;
use crate::model::{AddItemType, CreateItem, Item, ItemType, UpdateItem, UpdateItemType};

impl InventoryService {
    pub fn list_items(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Item>, ServiceError> {
        ops::list(&self.items, principal, &codes::item::LIST, query)
    }

    pub fn create_items(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Item>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.items,
            principal,
            &codes::item::CREATE,
            body,
            |c: CreateItem| c.into_record(actor.clone()),
        )
    }

    pub fn get_item(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Item, ServiceError> {
        ops::get(&self.items, principal, &codes::item::GET, id, query)
    }

    pub fn update_item(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Item, ServiceError> {
        ops::update::<Item, UpdateItem>(
            &self.items,
            principal,
            &codes::item::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_item(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Item, ServiceError> {
        ops::remove(&self.items, principal, &codes::item::DELETE, id, query)
    }

    pub fn item_types(
        &self,
        principal: &Principal,
        item_id: &str,
    ) -> Result<Vec<ItemType>, ServiceError> {
        ops::assoc_list(
            &self.items,
            &self.item_types,
            principal,
            &codes::item::TYPES,
            item_id,
        )
    }

    pub fn add_type_to_item(
        &self,
        principal: &Principal,
        item_id: &str,
        body: &[u8],
    ) -> Result<ItemType, ServiceError> {
        let actor = principal.actor();
        ops::assoc_add(
            &self.items,
            &self.item_types,
            principal,
            &codes::item::ADD_TYPE,
            item_id,
            body,
            |c: AddItemType| c.into_record(item_id, actor),
        )
    }

    pub fn item_type(
        &self,
        principal: &Principal,
        item_id: &str,
        type_id: &str,
    ) -> Result<ItemType, ServiceError> {
        ops::assoc_get(
            &self.items,
            &self.item_types,
            principal,
            &codes::item::GET_TYPE,
            item_id,
            type_id,
        )
    }

    pub fn update_item_type(
        &self,
        principal: &Principal,
        item_id: &str,
        type_id: &str,
        body: &[u8],
    ) -> Result<ItemType, ServiceError> {
        ops::assoc_update::<Item, ItemType, UpdateItemType>(
            &self.items,
            &self.item_types,
            principal,
            &codes::item::UPDATE_TYPE,
            item_id,
            type_id,
            body,
        )
    }

    pub fn remove_type_from_item(
        &self,
        principal: &Principal,
        item_id: &str,
        type_id: &str,
    ) -> Result<ItemType, ServiceError> {
        ops::assoc_remove(
            &self.items,
            &self.item_types,
            principal,
            &codes::item::REMOVE_TYPE,
            item_id,
            type_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{filter_query, principal, service};

    fn p() -> Principal {
        principal(
            "stockkeeper",
            &[
                codes::item::LIST,
                codes::item::CREATE,
                codes::item::GET,
                codes::item::UPDATE,
                codes::item::TYPES,
                codes::item::ADD_TYPE,
                codes::item::GET_TYPE,
                codes::item::REMOVE_TYPE,
            ],
        )
    }

    #[test]
    fn price_range_filter_and_sort() {
        let svc = service();
        svc.create_items(
            &p(),
            br#"[
                {"name":"bolt","price":0.2},
                {"name":"bracket","price":3.5},
                {"name":"beam","price":40.0}
            ]"#,
        )
        .unwrap();

        let query = format!(
            "{}&sort=price&order=desc",
            filter_query(r#"{"price":{"between":[1,50]}}"#)
        );
        let got = svc.list_items(&p(), Some(&query)).unwrap();
        assert_eq!(got.total, 2);
        let names: Vec<&str> = got.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["beam", "bracket"]);
    }

    #[test]
    fn implicit_eq_and_like_combine_in_order() {
        let svc = service();
        svc.create_items(
            &p(),
            br#"[
                {"name":"bolt m3","category_id":"c1","price":0.2},
                {"name":"bolt m4","category_id":"c2","price":0.3}
            ]"#,
        )
        .unwrap();

        let query = filter_query(r#"{"category_id":"c1","name":{"like":"bolt%"}}"#);
        let got = svc.list_items(&p(), Some(&query)).unwrap();
        assert_eq!(got.total, 1);
        assert_eq!(got.items[0].name, "bolt m3");
    }

    #[test]
    fn type_tagging_lifecycle() {
        let svc = service();
        let (records, _) = svc
            .create_items(&p(), br#"{"name":"bolt","price":0.2}"#)
            .unwrap();
        let item_id = records[0].id.clone();

        svc.add_type_to_item(&p(), &item_id, br#"{"type_id":"t1"}"#)
            .unwrap();
        assert_eq!(svc.item_types(&p(), &item_id).unwrap().len(), 1);

        let err = svc.item_type(&p(), &item_id, "missing").unwrap_err();
        assert_eq!(err.code().to_string(), "C07H08-05");

        svc.remove_type_from_item(&p(), &item_id, "t1").unwrap();
        assert!(svc.item_types(&p(), &item_id).unwrap().is_empty());
    }

    #[test]
    fn tagging_missing_item_is_parent_miss() {
        let svc = service();
        let err = svc
            .add_type_to_item(&p(), "ghost", br#"{"type_id":"t1"}"#)
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C07H07-03");
    }
}
