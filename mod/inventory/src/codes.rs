//! Operation tables: one row per endpoint, pairing the permission
//! string that gates it with its stable error code prefix. Same
//! operation numbering as the auth module.

use minierp_store::OpDef;

pub mod category {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get categories", 4, 1);
    pub const CREATE: OpDef = OpDef::new("create categories", 4, 2);
    pub const GET: OpDef = OpDef::new("get category", 4, 3);
    pub const UPDATE: OpDef = OpDef::new("update category", 4, 4);
    pub const DELETE: OpDef = OpDef::new("delete category", 4, 5);
}

pub mod typ {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get types", 5, 1);
    pub const CREATE: OpDef = OpDef::new("create types", 5, 2);
    pub const GET: OpDef = OpDef::new("get type", 5, 3);
    pub const UPDATE: OpDef = OpDef::new("update type", 5, 4);
    pub const DELETE: OpDef = OpDef::new("delete type", 5, 5);
}

pub mod stock {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get stocks", 6, 1);
    pub const CREATE: OpDef = OpDef::new("create stocks", 6, 2);
    pub const GET: OpDef = OpDef::new("get stock", 6, 3);
    pub const UPDATE: OpDef = OpDef::new("update stock", 6, 4);
    pub const DELETE: OpDef = OpDef::new("delete stock", 6, 5);
}

pub mod item {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get items", 7, 1);
    pub const CREATE: OpDef = OpDef::new("create items", 7, 2);
    pub const GET: OpDef = OpDef::new("get item", 7, 3);
    pub const UPDATE: OpDef = OpDef::new("update item", 7, 4);
    pub const DELETE: OpDef = OpDef::new("delete item", 7, 5);

    pub const TYPES: OpDef = OpDef::new("get types from item", 7, 6);
    pub const ADD_TYPE: OpDef = OpDef::new("add type to item", 7, 7);
    pub const GET_TYPE: OpDef = OpDef::new("get type from item", 7, 8);
    pub const UPDATE_TYPE: OpDef = OpDef::new("update type from item", 7, 9);
    pub const REMOVE_TYPE: OpDef = OpDef::new("remove type from item", 7, 10);
}

pub mod warehouse {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get warehouses", 8, 1);
    pub const CREATE: OpDef = OpDef::new("create warehouses", 8, 2);
    pub const GET: OpDef = OpDef::new("get warehouse", 8, 3);
    pub const UPDATE: OpDef = OpDef::new("update warehouse", 8, 4);
    pub const DELETE: OpDef = OpDef::new("delete warehouse", 8, 5);

    pub const ITEMS: OpDef = OpDef::new("get items from warehouse", 8, 6);
    pub const ADD_ITEM: OpDef = OpDef::new("add item to warehouse", 8, 7);
    pub const GET_ITEM: OpDef = OpDef::new("get item from warehouse", 8, 8);
    pub const UPDATE_ITEM: OpDef = OpDef::new("update item from warehouse", 8, 9);
    pub const REMOVE_ITEM: OpDef = OpDef::new("remove item from warehouse", 8, 10);
}

pub mod supplier {
    use super::OpDef;

    pub const LIST: OpDef = OpDef::new("get suppliers", 9, 1);
    pub const CREATE: OpDef = OpDef::new("create suppliers", 9, 2);
    pub const GET: OpDef = OpDef::new("get supplier", 9, 3);
    pub const UPDATE: OpDef = OpDef::new("update supplier", 9, 4);
    pub const DELETE: OpDef = OpDef::new("delete supplier", 9, 5);
}
