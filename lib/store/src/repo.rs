//! Generic resource repository over the JSON-record table scheme.

use std::marker::PhantomData;
use std::sync::Arc;

use minierp_core::ListParams;
use minierp_core::filter::Predicate;
use minierp_sql::{SQLStore, Statement, Value};

use crate::entity::Entity;
use crate::error::StoreError;
use crate::render;

pub struct Repository<T: Entity> {
    sql: Arc<dyn SQLStore>,
    _marker: PhantomData<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new(sql: Arc<dyn SQLStore>) -> Self {
        Self {
            sql,
            _marker: PhantomData,
        }
    }

    fn encode(record: &T) -> Result<String, StoreError> {
        serde_json::to_string(record).map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn decode(data: &str) -> Result<T, StoreError> {
        serde_json::from_str(data).map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn data_of(row: &minierp_sql::Row) -> Result<T, StoreError> {
        let data = row
            .get_str("data")
            .ok_or_else(|| StoreError::Codec("missing data column".into()))?;
        Self::decode(data)
    }

    fn insert_statement(record: &T) -> Result<Statement, StoreError> {
        let json = Self::encode(record)?;
        let audit = record.audit();

        let mut cols: Vec<&str> = vec!["id", "data"];
        let mut params = vec![
            Value::Text(record.id().to_string()),
            Value::Text(json),
        ];

        for (col, val) in record.index_values() {
            cols.push(col);
            params.push(val);
        }

        cols.extend(["created_at", "updated_at", "deleted_at"]);
        params.push(Value::Text(audit.created_at.clone()));
        params.push(Value::Text(audit.updated_at.clone()));
        params.push(deleted_at_value(audit.deleted_at.as_deref()));

        let placeholders: Vec<String> = (1..=params.len()).map(|i| format!("?{}", i)).collect();
        Ok(Statement::new(
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                T::TABLE,
                cols.join(", "),
                placeholders.join(", "),
            ),
            params,
        ))
    }

    /// Insert one or more records in a single transaction,
    /// all-or-nothing.
    pub fn create(&self, records: &[T]) -> Result<(), StoreError> {
        let mut statements = Vec::with_capacity(records.len());
        for record in records {
            statements.push(Self::insert_statement(record)?);
        }

        self.sql.exec_transaction(&statements).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint") {
                StoreError::Conflict(msg)
            } else {
                StoreError::Backend(msg)
            }
        })?;

        Ok(())
    }

    /// Fetch a record by id. `paranoid` hides soft-deleted rows.
    pub fn get(&self, id: &str, paranoid: bool) -> Result<Option<T>, StoreError> {
        let mut sql = format!("SELECT data FROM {} WHERE id = ?1", T::TABLE);
        if paranoid {
            sql.push_str(" AND deleted_at IS NULL");
        }
        let rows = self.sql.query(&sql, &[Value::Text(id.to_string())])?;
        match rows.first() {
            None => Ok(None),
            Some(row) => Ok(Some(Self::data_of(row)?)),
        }
    }

    /// Fetch a record by id, failing with `NotFound` on a miss.
    pub fn require(&self, id: &str, paranoid: bool) -> Result<T, StoreError> {
        self.get(id, paranoid)?
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", T::TABLE, id)))
    }

    fn where_sql(
        predicates: &[Predicate],
        paranoid: bool,
        next_param: &mut usize,
    ) -> (String, Vec<Value>) {
        let (mut clauses, params) = render::render_predicates(predicates, next_param);
        if paranoid {
            clauses.insert(0, "deleted_at IS NULL".to_string());
        }
        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        (where_sql, params)
    }

    /// List records matching the predicates. Sort field and predicate
    /// fields are validated against `T::COLUMNS` upstream.
    pub fn list(&self, predicates: &[Predicate], params: &ListParams) -> Result<Vec<T>, StoreError> {
        let mut next = 1;
        let (where_sql, mut bind) = Self::where_sql(predicates, params.paranoid, &mut next);

        let sort = params.sort.as_deref().unwrap_or("created_at");
        let mut sql = format!(
            "SELECT data FROM {}{} ORDER BY {} {}",
            T::TABLE,
            where_sql,
            sort,
            params.order.sql(),
        );

        match (params.limit, params.offset) {
            (Some(limit), Some(offset)) => {
                sql.push_str(&format!(" LIMIT ?{} OFFSET ?{}", next, next + 1));
                bind.push(Value::Integer(limit));
                bind.push(Value::Integer(offset));
            }
            (Some(limit), None) => {
                sql.push_str(&format!(" LIMIT ?{}", next));
                bind.push(Value::Integer(limit));
            }
            (None, Some(offset)) => {
                // SQLite requires a LIMIT clause for OFFSET to apply.
                sql.push_str(&format!(" LIMIT -1 OFFSET ?{}", next));
                bind.push(Value::Integer(offset));
            }
            (None, None) => {}
        }

        let rows = self.sql.query(&sql, &bind)?;
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(Self::data_of(row)?);
        }
        Ok(items)
    }

    /// Count records matching the predicates.
    pub fn count(&self, predicates: &[Predicate], paranoid: bool) -> Result<usize, StoreError> {
        let mut next = 1;
        let (where_sql, bind) = Self::where_sql(predicates, paranoid, &mut next);
        let sql = format!("SELECT COUNT(*) AS cnt FROM {}{}", T::TABLE, where_sql);
        let rows = self.sql.query(&sql, &bind)?;
        Ok(rows.first().and_then(|r| r.get_i64("cnt")).unwrap_or(0) as usize)
    }

    /// Persist a modified record. `NotFound` if no row matched.
    pub fn update(&self, id: &str, record: &T) -> Result<(), StoreError> {
        let json = Self::encode(record)?;
        let audit = record.audit();

        let mut sets = vec!["data = ?1".to_string()];
        let mut params = vec![Value::Text(json)];

        for (col, val) in record.index_values() {
            params.push(val);
            sets.push(format!("{} = ?{}", col, params.len()));
        }

        params.push(Value::Text(audit.updated_at.clone()));
        sets.push(format!("updated_at = ?{}", params.len()));
        params.push(deleted_at_value(audit.deleted_at.as_deref()));
        sets.push(format!("deleted_at = ?{}", params.len()));

        params.push(Value::Text(id.to_string()));
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            T::TABLE,
            sets.join(", "),
            params.len(),
        );

        let affected = self.sql.exec(&sql, &params)?;
        if affected == 0 {
            return Err(StoreError::NotFound(format!("{}/{}", T::TABLE, id)));
        }
        Ok(())
    }

    /// Soft delete: set `deleted_at` and return the updated record.
    pub fn soft_delete(&self, mut record: T, deleted_by: Option<String>) -> Result<T, StoreError> {
        record.audit_mut().mark_deleted(deleted_by);
        let id = record.id().to_string();
        self.update(&id, &record)?;
        Ok(record)
    }

    /// Hard delete: physically remove the row.
    pub fn hard_delete(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", T::TABLE);
        let affected = self.sql.exec(&sql, &[Value::Text(id.to_string())])?;
        if affected == 0 {
            return Err(StoreError::NotFound(format!("{}/{}", T::TABLE, id)));
        }
        Ok(())
    }
}

fn deleted_at_value(deleted_at: Option<&str>) -> Value {
    match deleted_at {
        Some(ts) => Value::Text(ts.to_string()),
        None => Value::Null,
    }
}
