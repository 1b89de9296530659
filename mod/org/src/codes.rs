//! Operation tables: one row per endpoint, pairing the permission
//! string that gates it with its stable error code prefix. Same
//! operation numbering as the auth module.

use minierp_store::OpDef;

pub mod company {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get companies", 10, 1);
    pub const CREATE: OpDef = OpDef::new("create companies", 10, 2);
    pub const GET: OpDef = OpDef::new("get company", 10, 3);
    pub const UPDATE: OpDef = OpDef::new("update company", 10, 4);
    pub const DELETE: OpDef = OpDef::new("delete company", 10, 5);
}

pub mod department {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get departments", 11, 1);
    pub const CREATE: OpDef = OpDef::new("create departments", 11, 2);
    pub const GET: OpDef = OpDef::new("get department", 11, 3);
    pub const UPDATE: OpDef = OpDef::new("update department", 11, 4);
    pub const DELETE: OpDef = OpDef::new("delete department", 11, 5);
}

pub mod job {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get jobs", 12, 1);
    pub const CREATE: OpDef = OpDef::new("create jobs", 12, 2);
    pub const GET: OpDef = OpDef::new("get job", 12, 3);
    pub const UPDATE: OpDef = OpDef::new("update job", 12, 4);
    pub const DELETE: OpDef = OpDef::new("delete job", 12, 5);
}
