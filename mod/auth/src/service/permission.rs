use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::AuthService;
use crate::codes;
use crate::model::{CreatePermission, Permission, UpdatePermission};

impl AuthService {
    pub fn list_permissions(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Permission>, ServiceError> {
        ops::list(&self.permissions, principal, &codes::permission::LIST, query)
    }

    pub fn create_permissions(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Permission>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.permissions,
            principal,
            &codes::permission::CREATE,
            body,
            |c: CreatePermission| c.into_record(actor.clone()),
        )
    }

    pub fn get_permission(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Permission, ServiceError> {
        ops::get(&self.permissions, principal, &codes::permission::GET, id, query)
    }

    pub fn update_permission(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Permission, ServiceError> {
        ops::update::<Permission, UpdatePermission>(
            &self.permissions,
            principal,
            &codes::permission::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_permission(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Permission, ServiceError> {
        ops::remove(
            &self.permissions,
            principal,
            &codes::permission::DELETE,
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
    fn list_filter_by_name() {
        let svc = service();
        let p = principal(
            "admin",
            &[codes::permission::LIST, codes::permission::CREATE],
        );
        svc.create_permissions(
            &p,
            br#"[{"name":"get roles"},{"name":"create roles"},{"name":"get users"}]"#,
        )
        .unwrap();

        let query = filter_query(r#"{"name":{"like":"%roles"}}"#);
        let got = svc.list_permissions(&p, Some(&query)).unwrap();
        assert_eq!(got.total, 2);
    }

    #[test]
    fn filter_on_unknown_field_is_rejected() {
        let svc = service();
        let p = principal("admin", &[codes::permission::LIST]);
        let query = filter_query(r#"{"secret":"x"}"#);
        let err = svc.list_permissions(&p, Some(&query)).unwrap_err();
        assert_eq!(err.code().to_string(), "C02H01-01");
    }

    #[test]
    fn codes_carry_the_permission_resource_number() {
        let svc = service();
        let err = svc
            .get_permission(&Principal::default(), "x", None)
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C02H03-00");
    }
}
