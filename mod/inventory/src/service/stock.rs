use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::InventoryService;
use crate::codes;
use crate::model::{CreateStock, Stock, UpdateStock};

impl InventoryService {
    pub fn list_stocks(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Stock>, ServiceError> {
        ops::list(&self.stocks, principal, &codes::stock::LIST, query)
    }

    pub fn create_stocks(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Stock>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.stocks,
            principal,
            &codes::stock::CREATE,
            body,
            |c: CreateStock| c.into_record(actor.clone()),
        )
    }

    pub fn get_stock(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Stock, ServiceError> {
        ops::get(&self.stocks, principal, &codes::stock::GET, id, query)
    }

    pub fn update_stock(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Stock, ServiceError> {
        ops::update::<Stock, UpdateStock>(
            &self.stocks,
            principal,
            &codes::stock::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_stock(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Stock, ServiceError> {
        ops::remove(&self.stocks, principal, &codes::stock::DELETE, id, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{principal, service};

    #[test]
    fn stock_codes_use_resource_six() {
        let svc = service();
        let err = svc
            .get_stock(&Principal::default(), "x", None)
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C06H03-00");

        let p = principal("admin", &[codes::stock::GET]);
        let err = svc.get_stock(&p, "x", None).unwrap_err();
        assert_eq!(err.code().to_string(), "C06H03-03");
    }
}
