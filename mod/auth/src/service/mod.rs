pub mod schema;

mod permission;
mod role;
mod user;

use std::sync::Arc;

use minierp_sql::{SQLError, SQLStore};
use minierp_store::{AssocRepository, Repository};

use crate::model::{Permission, Role, RolePermission, User, UserRole};

/// Auth service — repositories for roles, permissions, users and
/// their join tables. Operations live in the sibling files, one per
/// resource.
pub struct AuthService {
    pub(crate) roles: Repository<Role>,
    pub(crate) permissions: Repository<Permission>,
    pub(crate) users: Repository<User>,
    pub(crate) role_permissions: AssocRepository<RolePermission>,
    pub(crate) user_roles: AssocRepository<UserRole>,
}

impl AuthService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, SQLError> {
        schema::init_schema(sql.as_ref())?;
        tracing::debug!("auth schema ready");
        Ok(Self {
            roles: Repository::new(sql.clone()),
            permissions: Repository::new(sql.clone()),
            users: Repository::new(sql.clone()),
            role_permissions: AssocRepository::new(sql.clone()),
            user_roles: AssocRepository::new(sql),
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use minierp_core::Principal;
    use minierp_sql::SqliteStore;

    pub fn service() -> AuthService {
        let sql = SqliteStore::open_in_memory().unwrap();
        AuthService::new(Arc::new(sql)).unwrap()
    }

    pub fn principal(sub: &str, defs: &[minierp_store::OpDef]) -> Principal {
        Principal::new(
            sub,
            defs.iter().map(|d| d.permission.to_string()).collect(),
        )
    }

    /// URL-encode a filter JSON object into a query string.
    pub fn filter_query(json: &str) -> String {
        serde_urlencoded::to_string([("filter", json)]).unwrap()
    }
}
