use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::AuthService;
use crate::codes;
use crate::model::{
    AddRolePermission, CreateRole, Role, RolePermission, UpdateRole, UpdateRolePermission,
};

impl AuthService {
    pub fn list_roles(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Role>, ServiceError> {
        ops::list(&self.roles, principal, &codes::role::LIST, query)
    }

    pub fn create_roles(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Role>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.roles,
            principal,
            &codes::role::CREATE,
            body,
            |c: CreateRole| c.into_record(actor.clone()),
        )
    }

    pub fn get_role(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Role, ServiceError> {
        ops::get(&self.roles, principal, &codes::role::GET, id, query)
    }

    pub fn update_role(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Role, ServiceError> {
        ops::update::<Role, UpdateRole>(
            &self.roles,
            principal,
            &codes::role::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_role(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Role, ServiceError> {
        ops::remove(&self.roles, principal, &codes::role::DELETE, id, query)
    }

    pub fn role_permissions(
        &self,
        principal: &Principal,
        role_id: &str,
    ) -> Result<Vec<RolePermission>, ServiceError> {
        ops::assoc_list(
            &self.roles,
            &self.role_permissions,
            principal,
            &codes::role::PERMISSIONS,
            role_id,
        )
    }

    pub fn add_permission_to_role(
        &self,
        principal: &Principal,
        role_id: &str,
        body: &[u8],
    ) -> Result<RolePermission, ServiceError> {
        let actor = principal.actor();
        ops::assoc_add(
            &self.roles,
            &self.role_permissions,
            principal,
            &codes::role::ADD_PERMISSION,
            role_id,
            body,
            |c: AddRolePermission| c.into_record(role_id, actor),
        )
    }

    pub fn role_permission(
        &self,
        principal: &Principal,
        role_id: &str,
        permission_id: &str,
    ) -> Result<RolePermission, ServiceError> {
        ops::assoc_get(
            &self.roles,
            &self.role_permissions,
            principal,
            &codes::role::GET_PERMISSION,
            role_id,
            permission_id,
        )
    }

    pub fn update_role_permission(
        &self,
        principal: &Principal,
        role_id: &str,
        permission_id: &str,
        body: &[u8],
    ) -> Result<RolePermission, ServiceError> {
        ops::assoc_update::<Role, RolePermission, UpdateRolePermission>(
            &self.roles,
            &self.role_permissions,
            principal,
            &codes::role::UPDATE_PERMISSION,
            role_id,
            permission_id,
            body,
        )
    }

    pub fn remove_permission_from_role(
        &self,
        principal: &Principal,
        role_id: &str,
        permission_id: &str,
    ) -> Result<RolePermission, ServiceError> {
        ops::assoc_remove(
            &self.roles,
            &self.role_permissions,
            principal,
            &codes::role::REMOVE_PERMISSION,
            role_id,
            permission_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{principal, service};

    fn admin() -> Principal {
        principal(
            "admin",
            &[
                codes::role::LIST,
                codes::role::CREATE,
                codes::role::GET,
                codes::role::UPDATE,
                codes::role::DELETE,
                codes::role::PERMISSIONS,
                codes::role::ADD_PERMISSION,
                codes::role::GET_PERMISSION,
                codes::role::UPDATE_PERMISSION,
                codes::role::REMOVE_PERMISSION,
            ],
        )
    }

    #[test]
    fn create_then_get() {
        let svc = service();
        let p = admin();

        let (records, single) = svc
            .create_roles(&p, br#"{"name":"demo","description":"demo role"}"#)
            .unwrap();
        assert!(single);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "demo");
        assert_eq!(records[0].audit.created_by, Some("admin".into()));

        let got = svc
            .get_role(&p, &records[0].id, None)
            .unwrap();
        assert_eq!(got.name, "demo");
    }

    #[test]
    fn bulk_create_returns_all() {
        let svc = service();
        let (records, single) = svc
            .create_roles(&admin(), br#"[{"name":"a"},{"name":"b"}]"#)
            .unwrap();
        assert!(!single);
        assert_eq!(records.len(), 2);

        let listed = svc
            .list_roles(&admin(), None)
            .unwrap();
        assert_eq!(listed.total, 2);
    }

    #[test]
    fn authorization_runs_before_body_parse() {
        let svc = service();
        // Malformed body, but the caller is unauthorized: 403 wins.
        let err = svc
            .create_roles(&Principal::default(), b"not json at all")
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C01H02-00");
        assert_eq!(err.status_code().as_u16(), 403);
    }

    #[test]
    fn malformed_body_is_validation_branch() {
        let svc = service();
        let err = svc.create_roles(&admin(), b"not json").unwrap_err();
        assert_eq!(err.code().to_string(), "C01H02-01");
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[test]
    fn authorization_runs_before_query_parse() {
        let svc = service();
        // Malformed query string, unauthorized caller: 403 wins.
        let err = svc
            .list_roles(&Principal::default(), Some("limit=abc"))
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C01H01-00");
        assert_eq!(err.status_code().as_u16(), 403);
    }

    #[test]
    fn malformed_query_is_validation_branch() {
        let svc = service();
        let err = svc.list_roles(&admin(), Some("limit=abc")).unwrap_err();
        assert_eq!(err.code().to_string(), "C01H01-01");
        assert_eq!(err.status_code().as_u16(), 400);

        let err = svc
            .get_role(&admin(), "some-id", Some("paranoid=maybe"))
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C01H03-01");
    }

    #[test]
    fn created_by_is_null_for_subjectless_tokens() {
        let svc = service();
        let p = principal("", &[codes::role::CREATE]);
        let (records, _) = svc.create_roles(&p, br#"{"name":"demo"}"#).unwrap();
        assert_eq!(records[0].audit.created_by, None);
    }

    #[test]
    fn get_miss_has_not_found_branch() {
        let svc = service();
        let err = svc
            .get_role(&admin(), "nope", None)
            .unwrap_err();
        assert_eq!(err.code().to_string(), "C01H03-03");
        assert_eq!(err.status_code().as_u16(), 404);
    }

    #[test]
    fn update_is_merge_patch_with_pinned_id() {
        let svc = service();
        let p = admin();
        let (records, _) = svc.create_roles(&p, br#"{"name":"demo"}"#).unwrap();
        let id = records[0].id.clone();

        let updated = svc
            .update_role(
                &p,
                &id,
                br#"{"id":"hijack","name":"renamed"}"#,
                None,
            )
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.audit.updated_by, Some("admin".into()));
        assert_eq!(updated.audit.created_by, Some("admin".into()));
    }

    #[test]
    fn soft_delete_then_force_delete() {
        let svc = service();
        let p = admin();
        let (records, _) = svc.create_roles(&p, br#"{"name":"demo"}"#).unwrap();
        let id = records[0].id.clone();

        let deleted = svc
            .delete_role(&p, &id, None)
            .unwrap();
        assert!(deleted.audit.deleted_at.is_some());

        // Hidden from paranoid reads, visible otherwise.
        assert!(svc.get_role(&p, &id, None).is_err());
        let hidden = svc
            .get_role(&p, &id, Some("paranoid=false"))
            .unwrap();
        assert!(hidden.audit.deleted_at.is_some());

        svc.delete_role(&p, &id, Some("force=true&paranoid=false"))
            .unwrap();
        assert!(
            svc.get_role(&p, &id, Some("paranoid=false"))
                .is_err()
        );
    }

    #[test]
    fn member_miss_and_parent_miss_have_distinct_branches() {
        let svc = service();
        let p = admin();
        let (records, _) = svc.create_roles(&p, br#"{"name":"demo"}"#).unwrap();
        let role_id = records[0].id.clone();

        // Parent exists, member does not.
        let err = svc.role_permission(&p, &role_id, "nope").unwrap_err();
        assert_eq!(err.code().to_string(), "C01H08-05");

        // Parent does not exist.
        let err = svc.role_permission(&p, "ghost", "nope").unwrap_err();
        assert_eq!(err.code().to_string(), "C01H08-03");
    }

    #[test]
    fn permission_grant_lifecycle() {
        let svc = service();
        let p = admin();
        let (records, _) = svc.create_roles(&p, br#"{"name":"demo"}"#).unwrap();
        let role_id = records[0].id.clone();

        let grant = svc
            .add_permission_to_role(&p, &role_id, br#"{"permission_id":"perm1"}"#)
            .unwrap();
        assert_eq!(grant.role_id, role_id);
        assert_eq!(grant.permission_id, "perm1");

        let listed = svc.role_permissions(&p, &role_id).unwrap();
        assert_eq!(listed.len(), 1);

        let updated = svc
            .update_role_permission(
                &p,
                &role_id,
                "perm1",
                br#"{"extra":{"note":"granted"}}"#,
            )
            .unwrap();
        assert_eq!(updated.extra.unwrap()["note"], "granted");

        let removed = svc
            .remove_permission_from_role(&p, &role_id, "perm1")
            .unwrap();
        assert_eq!(removed.permission_id, "perm1");
        assert!(svc.role_permissions(&p, &role_id).unwrap().is_empty());
    }
}
