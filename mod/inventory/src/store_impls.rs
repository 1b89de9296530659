//! Storage trait implementations for inventory models.

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

macro_rules! impl_named_entity {
    ($ty:ident, $table:expr) => {
        impl Entity for $ty {
            const TABLE: &'static str = $table;
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
    };
}

impl_named_entity!(Category, "categories");
impl_named_entity!(Type, "types");
impl_named_entity!(Stock, "stocks");

impl Entity for Item {
    const TABLE: &'static str = "items";
    const COLUMNS: &'static [&'static str] = &["name", "category_id", "price"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("category_id", opt_text(&self.category_id)),
            ("price", Value::Real(self.price)),
        ]
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

impl Entity for Warehouse {
    const TABLE: &'static str = "warehouses";
    const COLUMNS: &'static [&'static str] = &["name", "company_id"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("company_id", opt_text(&self.company_id)),
        ]
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

impl Entity for Supplier {
    const TABLE: &'static str = "suppliers";
    const COLUMNS: &'static [&'static str] = &["name", "contact"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("contact", opt_text(&self.contact)),
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

impl_assoc!(ItemType, "item_types", item_id, type_id);
impl_assoc!(WarehouseItem, "warehouse_items", warehouse_id, item_id);
