//! The validation gate: schema checks on bodies and list parameters.
//!
//! Payload structs derive `validator::Validate`; list parameters get a
//! hand check (limit ceiling, sort allowlist, filter translation).
//! Handlers pass query strings raw, like bodies, so the authorization
//! gate runs before any parsing; `parse_query` is the parse step.
//! Every failure here carries the operation's `-01` branch code.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{OpCode, ServiceError};
use crate::filter::{self, Predicate};
use crate::types::ListParams;

/// Hard ceiling on page size, enforced here rather than in the store.
pub const MAX_LIMIT: i64 = 1000;

/// Sortable audit columns available on every resource table.
const AUDIT_SORT_FIELDS: &[&str] = &["created_at", "updated_at", "deleted_at"];

/// Build a validation-gate error (branch 01).
pub fn validation_error(op: OpCode, message: impl Into<String>) -> ServiceError {
    ServiceError::Validation {
        code: op.branch(1),
        message: message.into(),
    }
}

/// Schema-check a request payload.
pub fn validate_payload<T: Validate>(payload: &T, op: OpCode) -> Result<(), ServiceError> {
    payload
        .validate()
        .map_err(|e| validation_error(op, e.to_string()))
}

/// Parse a raw URL query string into an operation's parameter struct.
/// An absent or empty query yields the defaults.
pub fn parse_query<T: DeserializeOwned + Default>(
    query: Option<&str>,
    op: OpCode,
) -> Result<T, ServiceError> {
    match query {
        None | Some("") => Ok(T::default()),
        Some(raw) => serde_urlencoded::from_str(raw)
            .map_err(|e| validation_error(op, format!("invalid query string: {}", e))),
    }
}

/// Check list parameters and translate the declarative filter into
/// predicates against the entity's filterable columns.
pub fn check_list_params(
    params: &ListParams,
    columns: &[&str],
    op: OpCode,
) -> Result<Vec<Predicate>, ServiceError> {
    if let Some(limit) = params.limit {
        if !(0..=MAX_LIMIT).contains(&limit) {
            return Err(validation_error(
                op,
                format!("limit must be between 0 and {}", MAX_LIMIT),
            ));
        }
    }
    if let Some(offset) = params.offset {
        if offset < 0 {
            return Err(validation_error(op, "offset must not be negative"));
        }
    }
    if let Some(sort) = &params.sort {
        let sortable = columns.contains(&sort.as_str())
            || AUDIT_SORT_FIELDS.contains(&sort.as_str())
            || sort == "id";
        if !sortable {
            return Err(validation_error(op, format!("cannot sort by `{}`", sort)));
        }
    }

    let predicates = match &params.filter {
        None => Vec::new(),
        Some(raw) => {
            let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)
                .map_err(|e| validation_error(op, format!("filter is not a JSON object: {}", e)))?;
            let predicates =
                filter::translate(&map).map_err(|e| validation_error(op, e.to_string()))?;
            filter::check_fields(&predicates, columns)
                .map_err(|e| validation_error(op, e.to_string()))?;
            predicates
        }
    };

    Ok(predicates)
}

/// Reject empty or oversized path ids before touching the store.
pub fn check_id(id: &str, op: OpCode) -> Result<(), ServiceError> {
    if id.is_empty() || id.len() > 255 {
        return Err(validation_error(op, "invalid id"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterOp;

    const OP: OpCode = OpCode::new(1, 1);

    #[test]
    fn limit_ceiling() {
        let params = ListParams {
            limit: Some(MAX_LIMIT + 1),
            ..Default::default()
        };
        let err = check_list_params(&params, &["name"], OP).unwrap_err();
        assert_eq!(err.code().to_string(), "C01H01-01");
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[test]
    fn negative_offset_rejected() {
        let params = ListParams {
            offset: Some(-1),
            ..Default::default()
        };
        assert!(check_list_params(&params, &["name"], OP).is_err());
    }

    #[test]
    fn sort_allowlist() {
        let mut params = ListParams {
            sort: Some("name".into()),
            ..Default::default()
        };
        assert!(check_list_params(&params, &["name"], OP).is_ok());

        params.sort = Some("created_at".into());
        assert!(check_list_params(&params, &["name"], OP).is_ok());

        params.sort = Some("data".into());
        assert!(check_list_params(&params, &["name"], OP).is_err());
    }

    #[test]
    fn filter_translates_through() {
        let params = ListParams {
            filter: Some(r#"{"name":{"like":"%abc%"}}"#.into()),
            ..Default::default()
        };
        let preds = check_list_params(&params, &["name"], OP).unwrap();
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].op, FilterOp::Like);
    }

    #[test]
    fn bad_filter_is_validation_failure() {
        for raw in [
            "not json",
            r#"{"name":{"regex":"x"}}"#,
            r#"{"other":"y"}"#,
            r#"{"name":{"between":[1]}}"#,
        ] {
            let params = ListParams {
                filter: Some(raw.into()),
                ..Default::default()
            };
            let err = check_list_params(&params, &["name"], OP).unwrap_err();
            assert_eq!(err.code().to_string(), "C01H01-01");
        }
    }

    #[test]
    fn query_parsing() {
        use crate::types::{DeleteParams, GetParams, SortOrder};

        let params: ListParams = parse_query(None, OP).unwrap();
        assert!(params.paranoid);

        let params: ListParams =
            parse_query(Some("limit=5&sort=name&order=desc"), OP).unwrap();
        assert_eq!(params.limit, Some(5));
        assert_eq!(params.order, SortOrder::Desc);

        // Percent-encoded filter values decode before translation.
        let params: ListParams =
            parse_query(Some("filter=%7B%22name%22%3A%22a%22%7D"), OP).unwrap();
        assert_eq!(params.filter.as_deref(), Some(r#"{"name":"a"}"#));

        let params: GetParams = parse_query(Some("paranoid=false"), OP).unwrap();
        assert!(!params.paranoid);

        let params: DeleteParams = parse_query(Some("force=true"), OP).unwrap();
        assert!(params.force);

        let err = parse_query::<ListParams>(Some("limit=abc"), OP).unwrap_err();
        assert_eq!(err.code().to_string(), "C01H01-01");
        assert_eq!(err.status_code().as_u16(), 400);
    }

    #[test]
    fn id_check() {
        assert!(check_id("abc", OP).is_ok());
        assert!(check_id("", OP).is_err());
        assert!(check_id(&"x".repeat(256), OP).is_err());
    }
}
