//! Predicate → SQL rendering.
//!
//! Field names are validated against the entity's column allowlist
//! before they reach this point, so they are safe to interpolate; all
//! values go through placeholders.

use minierp_core::filter::{FilterOp, Predicate};
use minierp_sql::Value;

/// Convert a JSON scalar into a SQL parameter value.
pub fn json_to_sql(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Integer(*b as i64),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Real(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Value::Text(s.clone()),
        other => Value::Text(other.to_string()),
    }
}

/// Render predicates into AND-joined WHERE fragments. `next_param` is
/// the 1-based index of the next free `?N` placeholder and is advanced
/// past the parameters this call emits.
pub fn render_predicates(
    predicates: &[Predicate],
    next_param: &mut usize,
) -> (Vec<String>, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    for p in predicates {
        match p.op {
            FilterOp::Between => {
                let empty = serde_json::Value::Null;
                let arr = p.value.as_array();
                let low = arr.and_then(|a| a.first()).unwrap_or(&empty);
                let high = arr.and_then(|a| a.get(1)).unwrap_or(&empty);
                clauses.push(format!(
                    "{} BETWEEN ?{} AND ?{}",
                    p.field,
                    *next_param,
                    *next_param + 1
                ));
                params.push(json_to_sql(low));
                params.push(json_to_sql(high));
                *next_param += 2;
            }
            op => {
                let sql_op = match op {
                    FilterOp::Eq => "=",
                    FilterOp::Ne => "<>",
                    FilterOp::Like => "LIKE",
                    FilterOp::Gt => ">",
                    FilterOp::Gte => ">=",
                    FilterOp::Lt => "<",
                    FilterOp::Lte => "<=",
                    FilterOp::Between => unreachable!(),
                };
                clauses.push(format!("{} {} ?{}", p.field, sql_op, *next_param));
                params.push(json_to_sql(&p.value));
                *next_param += 1;
            }
        }
    }

    (clauses, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pred(field: &str, op: FilterOp, value: serde_json::Value) -> Predicate {
        Predicate {
            field: field.into(),
            op,
            value,
        }
    }

    #[test]
    fn renders_operators() {
        let mut next = 1;
        let (clauses, params) = render_predicates(
            &[
                pred("name", FilterOp::Like, json!("%abc%")),
                pred("price", FilterOp::Gte, json!(10)),
            ],
            &mut next,
        );
        assert_eq!(clauses, vec!["name LIKE ?1", "price >= ?2"]);
        assert_eq!(
            params,
            vec![Value::Text("%abc%".into()), Value::Integer(10)]
        );
        assert_eq!(next, 3);
    }

    #[test]
    fn renders_between_with_two_params() {
        let mut next = 4;
        let (clauses, params) =
            render_predicates(&[pred("price", FilterOp::Between, json!([1, 5]))], &mut next);
        assert_eq!(clauses, vec!["price BETWEEN ?4 AND ?5"]);
        assert_eq!(params, vec![Value::Integer(1), Value::Integer(5)]);
        assert_eq!(next, 6);
    }

    #[test]
    fn json_scalars_map_to_sql_values() {
        assert_eq!(json_to_sql(&json!(true)), Value::Integer(1));
        assert_eq!(json_to_sql(&json!(1.5)), Value::Real(1.5));
        assert_eq!(json_to_sql(&json!("x")), Value::Text("x".into()));
        assert_eq!(json_to_sql(&json!(null)), Value::Null);
    }
}
