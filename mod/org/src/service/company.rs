use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::OrgService;
use crate::codes;
use crate::model::{Company, CreateCompany, UpdateCompany};

impl OrgService {
    pub fn list_companies(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Company>, ServiceError> {
        ops::list(&self.companies, principal, &codes::company::LIST, query)
    }

    pub fn create_companies(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Company>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.companies,
            principal,
            &codes::company::CREATE,
            body,
            |c: CreateCompany| c.into_record(actor.clone()),
        )
    }

    pub fn get_company(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Company, ServiceError> {
        ops::get(&self.companies, principal, &codes::company::GET, id, query)
    }

    pub fn update_company(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Company, ServiceError> {
        ops::update::<Company, UpdateCompany>(
            &self.companies,
            principal,
            &codes::company::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_company(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Company, ServiceError> {
        ops::remove(
            &self.companies,
            principal,
            &codes::company::DELETE,
            id,
            query,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{principal, service};

    #[test]
    fn company_codes_use_two_digit_resource() {
        let svc = service();
        let err = svc
            .get_company(&Principal::default(), "x", None)
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C10H03-00");

        let p = principal("hr", &[codes::company::GET]);
        let err = svc.get_company(&p, "x", None).unwrap_err();
        assert_eq!(err.code().to_string(), "C10H03-03");
    }

    #[test]
    fn create_and_list() {
        let svc = service();
        let p = principal("hr", &[codes::company::CREATE, codes::company::LIST]);
        svc.create_companies(&p, br#"{"name":"acme"}"#).unwrap();

        let listed = svc.list_companies(&p, None).unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.items[0].name, "acme");
    }
}
