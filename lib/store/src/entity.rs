//! Storage traits for resources and association records.
//!
//! Every record is persisted as a JSON `data` column plus a handful of
//! indexed columns mirroring filterable fields and audit timestamps.
//! Each module implements these traits for its models in
//! `store_impls.rs`.

use serde::Serialize;
use serde::de::DeserializeOwned;

use minierp_core::Audit;
use minierp_sql::Value;

/// A top-level resource with its own CRUD lifecycle.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Table name.
    const TABLE: &'static str;

    /// Indexed columns; the only fields filters and sort keys may name.
    const COLUMNS: &'static [&'static str];

    /// Unique, stable identifier.
    fn id(&self) -> &str;

    /// Values for the indexed columns, aligned with [`Self::COLUMNS`].
    fn index_values(&self) -> Vec<(&'static str, Value)>;

    fn audit(&self) -> &Audit;

    fn audit_mut(&mut self) -> &mut Audit;
}

/// A many-to-many join record, addressable only under its parent.
pub trait AssocEntity: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Join table name.
    const TABLE: &'static str;

    /// Column holding the owning resource's id.
    const PARENT_COL: &'static str;

    /// Column holding the linked resource's id.
    const CHILD_COL: &'static str;

    fn parent_id(&self) -> &str;

    fn child_id(&self) -> &str;

    fn audit(&self) -> &Audit;

    fn audit_mut(&mut self) -> &mut Audit;
}
