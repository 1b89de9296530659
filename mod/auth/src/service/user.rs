use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::AuthService;
use crate::codes;
use crate::model::{AddUserRole, CreateUser, UpdateUser, UpdateUserRole, User, UserRole};

impl AuthService {
    pub fn list_users(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<User>, ServiceError> {
        ops::list(&self.users, principal, &codes::user::LIST, query)
    }

    pub fn create_users(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<User>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.users,
            principal,
            &codes::user::CREATE,
            body,
            |c: CreateUser| c.into_record(actor.clone()),
        )
    }

    pub fn get_user(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<User, ServiceError> {
        ops::get(&self.users, principal, &codes::user::GET, id, query)
    }

    pub fn update_user(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<User, ServiceError> {
        ops::update::<User, UpdateUser>(
            &self.users,
            principal,
            &codes::user::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_user(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<User, ServiceError> {
        ops::remove(&self.users, principal, &codes::user::DELETE, id, query)
    }

    pub fn user_roles(
        &self,
        principal: &Principal,
        user_id: &str,
    ) -> Result<Vec<UserRole>, ServiceError> {
        ops::assoc_list(
            &self.users,
            &self.user_roles,
            principal,
            &codes::user::ROLES,
            user_id,
        )
    }

    pub fn add_role_to_user(
        &self,
        principal: &Principal,
        user_id: &str,
        body: &[u8],
    ) -> Result<UserRole, ServiceError> {
        let actor = principal.actor();
        ops::assoc_add(
            &self.users,
            &self.user_roles,
            principal,
            &codes::user::ADD_ROLE,
            user_id,
            body,
            |c: AddUserRole| c.into_record(user_id, actor),
        )
    }

    pub fn user_role(
        &self,
        principal: &Principal,
        user_id: &str,
        role_id: &str,
    ) -> Result<UserRole, ServiceError> {
        ops::assoc_get(
            &self.users,
            &self.user_roles,
            principal,
            &codes::user::GET_ROLE,
            user_id,
            role_id,
        )
    }

    pub fn update_user_role(
        &self,
        principal: &Principal,
        user_id: &str,
        role_id: &str,
        body: &[u8],
    ) -> Result<UserRole, ServiceError> {
        ops::assoc_update::<User, UserRole, UpdateUserRole>(
            &self.users,
            &self.user_roles,
            principal,
            &codes::user::UPDATE_ROLE,
            user_id,
            role_id,
            body,
        )
    }

    pub fn remove_role_from_user(
        &self,
        principal: &Principal,
        user_id: &str,
        role_id: &str,
    ) -> Result<UserRole, ServiceError> {
        ops::assoc_remove(
            &self.users,
            &self.user_roles,
            principal,
            &codes::user::REMOVE_ROLE,
            user_id,
            role_id,
        )
    }
}
