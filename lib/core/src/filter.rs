//! Declarative filter → predicate translation.
//!
//! A filter is a JSON object mapping field names to either a scalar
//! (implicit equality) or an operator object:
//!
//! ```json
//! {"name": {"like": "%abc%"}, "price": {"between": [10, 20]}, "active": true}
//! ```
//!
//! Translation is pure and deterministic; output order equals the
//! insertion order of the input object (serde_json `preserve_order`).
//! Fields combine with implicit AND — there is no OR composition.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while checking a declarative filter. These surface
/// through the validation gate, never the translator's callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown operator `{op}` on field `{field}`")]
    UnknownOperator { field: String, op: String },

    #[error("`between` on field `{0}` expects exactly [low, high]")]
    BetweenArity(String),

    #[error("field `{0}` is not filterable")]
    UnknownField(String),
}

/// The closed operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Like,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
}

impl FilterOp {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "eq" => Some(FilterOp::Eq),
            "ne" => Some(FilterOp::Ne),
            "like" => Some(FilterOp::Like),
            "gt" => Some(FilterOp::Gt),
            "gte" => Some(FilterOp::Gte),
            "lt" => Some(FilterOp::Lt),
            "lte" => Some(FilterOp::Lte),
            "between" => Some(FilterOp::Between),
            _ => None,
        }
    }
}

/// One backend-neutral predicate. Predicates from a single filter are
/// combined with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

/// Translate a declarative search object into a predicate list.
///
/// Scalar values become implicit equality. `like` values pass the
/// caller's `%` wildcards through verbatim. `between` requires exactly
/// a two-element `[low, high]` array.
pub fn translate(filter: &Map<String, Value>) -> Result<Vec<Predicate>, FilterError> {
    let mut predicates = Vec::new();

    for (field, condition) in filter {
        match condition {
            Value::Object(ops) => {
                for (key, value) in ops {
                    let op = FilterOp::from_key(key).ok_or_else(|| FilterError::UnknownOperator {
                        field: field.clone(),
                        op: key.clone(),
                    })?;
                    if op == FilterOp::Between {
                        let ok = value.as_array().map(|a| a.len() == 2).unwrap_or(false);
                        if !ok {
                            return Err(FilterError::BetweenArity(field.clone()));
                        }
                    }
                    predicates.push(Predicate {
                        field: field.clone(),
                        op,
                        value: value.clone(),
                    });
                }
            }
            scalar => predicates.push(Predicate {
                field: field.clone(),
                op: FilterOp::Eq,
                value: scalar.clone(),
            }),
        }
    }

    Ok(predicates)
}

/// Reject predicates naming fields outside the allowed column set.
pub fn check_fields(predicates: &[Predicate], allowed: &[&str]) -> Result<(), FilterError> {
    for p in predicates {
        if !allowed.contains(&p.field.as_str()) {
            return Err(FilterError::UnknownField(p.field.clone()));
        }
    }
    Ok(())
}
