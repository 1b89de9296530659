//! Operation tables: one row per endpoint, pairing the permission
//! string that gates it with its stable error code prefix.
//!
//! Resource numbers are assigned globally across modules; operation
//! numbers are fixed by shape: 01 list, 02 create, 03 get, 04 update,
//! 05 delete, then 06–10 for the association operations in the same
//! order.

use minierp_store::OpDef;

pub mod role {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get roles", 1, 1);
    pub const CREATE: OpDef = OpDef::new("create roles", 1, 2);
    pub const GET: OpDef = OpDef::new("get role", 1, 3);
    pub const UPDATE: OpDef = OpDef::new("update role", 1, 4);
    pub const DELETE: OpDef = OpDef::new("delete role", 1, 5);

    pub const PERMISSIONS: OpDef = OpDef::new("get permissions from role", 1, 6);
    pub const ADD_PERMISSION: OpDef = OpDef::new("add permission to role", 1, 7);
    pub const GET_PERMISSION: OpDef = OpDef::new("get permission from role", 1, 8);
    pub const UPDATE_PERMISSION: OpDef = OpDef::new("update permission from role", 1, 9);
    pub const REMOVE_PERMISSION: OpDef = OpDef::new("remove permission from role", 1, 10);
}

pub mod permission {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get permissions", 2, 1);
    pub const CREATE: OpDef = OpDef::new("create permissions", 2, 2);
    pub const GET: OpDef = OpDef::new("get permission", 2, 3);
    pub const UPDATE: OpDef = OpDef::new("update permission", 2, 4);
    pub const DELETE: OpDef = OpDef::new("delete permission", 2, 5);
}

pub mod user {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get users", 3, 1);
    pub const CREATE: OpDef = OpDef::new("create users", 3, 2);
    pub const GET: OpDef = OpDef::new("get user", 3, 3);
    pub const UPDATE: OpDef = OpDef::new("update user", 3, 4);
    pub const DELETE: OpDef = OpDef::new("delete user", 3, 5);

    pub const ROLES: OpDef = OpDef::new("get roles from user", 3, 6);
    pub const ADD_ROLE: OpDef = OpDef::new("add role to user", 3, 7);
    pub const GET_ROLE: OpDef = OpDef::new("get role from user", 3, 8);
    pub const UPDATE_ROLE: OpDef = OpDef::new("update role from user", 3, 9);
    pub const REMOVE_ROLE: OpDef = OpDef::new("remove role from user", 3, 10);
}
