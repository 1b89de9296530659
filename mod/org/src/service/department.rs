use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::OrgService;
use crate::codes;
use crate::model::{CreateDepartment, Department, UpdateDepartment};

impl OrgService {
    pub fn list_departments(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Department>, ServiceError> {
        ops::list(&self.departments, principal, &codes::department::LIST, query)
    }

    pub fn create_departments(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Department>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.departments,
            principal,
            &codes::department::CREATE,
            body,
            |c: CreateDepartment| c.into_record(actor.clone()),
        )
    }

    pub fn get_department(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Department, ServiceError> {
        ops::get(
            &self.departments,
            principal,
            &codes::department::GET,
            id,
            query,
        )
    }

    pub fn update_department(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Department, ServiceError> {
        ops::update::<Department, UpdateDepartment>(
            &self.departments,
            principal,
            &codes::department::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_department(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Department, ServiceError> {
        ops::remove(
            &self.departments,
            principal,
            &codes::department::DELETE,
            id,
            query,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{filter_query, principal, service};

    #[test]
    fn filter_by_company() {
        let svc = service();
        let p = principal(
            "hr",
            &[codes::department::CREATE, codes::department::LIST],
        );
        svc.create_departments(
            &p,
            br#"[
                {"name":"eng","company_id":"c1"},
                {"name":"sales","company_id":"c1"},
                {"name":"eng","company_id":"c2"}
            ]"#,
        )
        .unwrap();

        let query = filter_query(r#"{"company_id":"c1"}"#);
        assert_eq!(svc.list_departments(&p, Some(&query)).unwrap().total, 2);
    }
}
