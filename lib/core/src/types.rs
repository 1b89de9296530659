use serde::{Deserialize, Serialize};

/// Sort direction for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Parameters for list/query operations.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    /// Maximum number of results to return.
    #[serde(default)]
    pub limit: Option<i64>,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: Option<i64>,

    /// Sort field (single field; defaults to `created_at`).
    #[serde(default)]
    pub sort: Option<String>,

    /// Sort direction, default ascending.
    #[serde(default)]
    pub order: SortOrder,

    /// Declarative search object, URL-encoded JSON.
    #[serde(default)]
    pub filter: Option<String>,

    /// When false, soft-deleted records are included.
    #[serde(default = "default_true")]
    pub paranoid: bool,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: None,
            offset: None,
            sort: None,
            order: SortOrder::Asc,
            filter: None,
            paranoid: true,
        }
    }
}

/// Query flags for single-resource reads.
#[derive(Debug, Clone, Deserialize)]
pub struct GetParams {
    #[serde(default = "default_true")]
    pub paranoid: bool,
}

impl Default for GetParams {
    fn default() -> Self {
        Self { paranoid: true }
    }
}

/// Query flags for delete operations.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteParams {
    /// Hard delete: the record is physically removed.
    #[serde(default)]
    pub force: bool,

    #[serde(default = "default_true")]
    pub paranoid: bool,
}

impl Default for DeleteParams {
    fn default() -> Self {
        Self {
            force: false,
            paranoid: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Result wrapper for list operations.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Audit fields carried by every resource and association record.
/// Serialized flattened; absent attributions stay `null` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// RFC 3339 last update timestamp.
    pub updated_at: String,

    /// Soft-delete timestamp; `null` while the record is live.
    #[serde(default)]
    pub deleted_at: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub updated_by: Option<String>,

    #[serde(default)]
    pub deleted_by: Option<String>,
}

impl Audit {
    /// Fresh audit fields for a record created now.
    pub fn now(created_by: Option<String>) -> Self {
        let ts = now_rfc3339();
        Self {
            created_at: ts.clone(),
            updated_at: ts,
            deleted_at: None,
            created_by,
            updated_by: None,
            deleted_by: None,
        }
    }

    /// Mark the record updated now.
    pub fn touch(&mut self, updated_by: Option<String>) {
        self.updated_at = now_rfc3339();
        self.updated_by = updated_by;
    }

    /// Mark the record soft-deleted now.
    pub fn mark_deleted(&mut self, deleted_by: Option<String>) {
        let ts = now_rfc3339();
        self.updated_at = ts.clone();
        self.deleted_at = Some(ts);
        self.deleted_by = deleted_by;
    }
}

/// Create payloads accept either a single object or an array of
/// objects (bulk insert, all-or-nothing).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn is_single(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(v) => vec![v],
            OneOrMany::Many(vs) => vs,
        }
    }
}

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Merge a JSON patch into a base value.
///
/// For each key in `patch`:
/// - If the value is `null`, the key is removed from `base`.
/// - Otherwise, the key is set to the patch value.
///
/// This follows RFC 7386 (JSON Merge Patch) semantics.
pub fn merge_patch(base: &mut serde_json::Value, patch: &serde_json::Value) {
    if let (Some(base_obj), Some(patch_obj)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_obj {
            if value.is_null() {
                base_obj.remove(key);
            } else if value.is_object() {
                // Recursively merge nested objects.
                let entry = base_obj
                    .entry(key.clone())
                    .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
                merge_patch(entry, value);
            } else {
                base_obj.insert(key.clone(), value.clone());
            }
        }
    } else {
        *base = patch.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id() {
        let id = new_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }

    #[test]
    fn test_now_rfc3339() {
        let ts = now_rfc3339();
        assert!(ts.contains('T'));
    }

    #[test]
    fn test_merge_patch() {
        let mut base = serde_json::json!({"a": 1, "b": 2, "c": {"d": 3}});
        let patch = serde_json::json!({"b": null, "c": {"e": 4}, "f": 5});
        merge_patch(&mut base, &patch);
        assert_eq!(
            base,
            serde_json::json!({"a": 1, "c": {"d": 3, "e": 4}, "f": 5})
        );
    }

    #[test]
    fn one_or_many_accepts_both_shapes() {
        let one: OneOrMany<i32> = serde_json::from_str("3").unwrap();
        assert!(one.is_single());
        assert_eq!(one.into_vec(), vec![3]);

        let many: OneOrMany<i32> = serde_json::from_str("[1,2]").unwrap();
        assert!(!many.is_single());
        assert_eq!(many.into_vec(), vec![1, 2]);
    }

    #[test]
    fn audit_lifecycle() {
        let mut audit = Audit::now(None);
        assert!(audit.deleted_at.is_none());
        assert_eq!(audit.created_by, None);
        assert_eq!(audit.created_at, audit.updated_at);

        audit.mark_deleted(Some("u1".into()));
        assert!(audit.deleted_at.is_some());
        assert_eq!(audit.deleted_by, Some("u1".into()));
    }

    #[test]
    fn audit_serializes_null_attribution() {
        let audit = Audit::now(None);
        let v = serde_json::to_value(&audit).unwrap();
        assert!(v.get("created_by").unwrap().is_null());
    }

    #[test]
    fn list_params_defaults() {
        let p = ListParams::default();
        assert!(p.paranoid);
        assert_eq!(p.order, SortOrder::Asc);
        assert!(p.limit.is_none());
    }
}
