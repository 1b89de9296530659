//! Storage trait implementations for auth models.

use minierp_core::Audit;
use minierp_sql::Value;
use minierp_store::{AssocEntity, Entity};

use crate::model::*;

fn opt_text(v: &Option<String>) -> Value {
    match v {
        Some(s) => Value::Text(s.clone()),
        None => Value::Null,
    }
}

impl Entity for Role {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![("name", Value::Text(self.name.clone()))]
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

impl Entity for Permission {
    const TABLE: &'static str = "permissions";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![("name", Value::Text(self.name.clone()))]
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "email"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("username", Value::Text(self.username.clone())),
            ("email", opt_text(&self.email)),
        ]
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

macro_rules! impl_assoc {
    ($ty:ident, $table:expr, $parent:ident, $child:ident) => {
        impl AssocEntity for $ty {
            const TABLE: &'static str = $table;
            const PARENT_COL: &'static str = stringify!($parent);
            const CHILD_COL: &'static str = stringify!($child);

            fn parent_id(&self) -> &str {
                &self.$parent
            }

            fn child_id(&self) -> &str {
                &self.$child
            }

            fn audit(&self) -> &Audit {
                &self.audit
            }

            fn audit_mut(&mut self) -> &mut Audit {
                &mut self.audit
            }
        }
    };
}

impl_assoc!(RolePermission, "role_permissions", role_id, permission_id);
impl_assoc!(UserRole, "user_roles", user_id, role_id);
