//! Generic repository for many-to-many join tables.
//!
//! Join rows are keyed `(parent_id, child_id)` and carry their own
//! JSON `data` payload. Parent existence is the service's lookup-gate
//! concern; a missing *member* here is `Ok(None)`, never an error, so
//! the service can map it to its own 404 branch.

use std::marker::PhantomData;
use std::sync::Arc;

use minierp_sql::{SQLStore, Value};

use crate::entity::AssocEntity;
use crate::error::StoreError;

pub struct AssocRepository<J: AssocEntity> {
    sql: Arc<dyn SQLStore>,
    _marker: PhantomData<J>,
}

impl<J: AssocEntity> AssocRepository<J> {
    pub fn new(sql: Arc<dyn SQLStore>) -> Self {
        Self {
            sql,
            _marker: PhantomData,
        }
    }

    fn encode(record: &J) -> Result<String, StoreError> {
        serde_json::to_string(record).map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn decode(data: &str) -> Result<J, StoreError> {
        serde_json::from_str(data).map_err(|e| StoreError::Codec(e.to_string()))
    }

    /// All members under a parent, in creation order.
    pub fn list(&self, parent_id: &str) -> Result<Vec<J>, StoreError> {
        let sql = format!(
            "SELECT data FROM {} WHERE {} = ?1 ORDER BY created_at",
            J::TABLE,
            J::PARENT_COL,
        );
        let rows = self.sql.query(&sql, &[Value::Text(parent_id.to_string())])?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            let data = row
                .get_str("data")
                .ok_or_else(|| StoreError::Codec("missing data column".into()))?;
            items.push(Self::decode(data)?);
        }
        Ok(items)
    }

    /// Insert or replace the join record for its `(parent, child)` key.
    pub fn put(&self, record: &J) -> Result<(), StoreError> {
        let json = Self::encode(record)?;
        let audit = record.audit();
        let sql = format!(
            "INSERT OR REPLACE INTO {} ({}, {}, data, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            J::TABLE,
            J::PARENT_COL,
            J::CHILD_COL,
        );
        self.sql.exec(
            &sql,
            &[
                Value::Text(record.parent_id().to_string()),
                Value::Text(record.child_id().to_string()),
                Value::Text(json),
                Value::Text(audit.created_at.clone()),
                Value::Text(audit.updated_at.clone()),
            ],
        )?;
        Ok(())
    }

    /// Fetch one member. A miss is `Ok(None)`.
    pub fn get(&self, parent_id: &str, child_id: &str) -> Result<Option<J>, StoreError> {
        let sql = format!(
            "SELECT data FROM {} WHERE {} = ?1 AND {} = ?2",
            J::TABLE,
            J::PARENT_COL,
            J::CHILD_COL,
        );
        let rows = self.sql.query(
            &sql,
            &[
                Value::Text(parent_id.to_string()),
                Value::Text(child_id.to_string()),
            ],
        )?;
        match rows.first() {
            None => Ok(None),
            Some(row) => {
                let data = row
                    .get_str("data")
                    .ok_or_else(|| StoreError::Codec("missing data column".into()))?;
                Ok(Some(Self::decode(data)?))
            }
        }
    }

    /// Persist a modified join record.
    pub fn update(&self, parent_id: &str, child_id: &str, record: &J) -> Result<(), StoreError> {
        let json = Self::encode(record)?;
        let sql = format!(
            "UPDATE {} SET data = ?1, updated_at = ?2 WHERE {} = ?3 AND {} = ?4",
            J::TABLE,
            J::PARENT_COL,
            J::CHILD_COL,
        );
        let affected = self.sql.exec(
            &sql,
            &[
                Value::Text(json),
                Value::Text(record.audit().updated_at.clone()),
                Value::Text(parent_id.to_string()),
                Value::Text(child_id.to_string()),
            ],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound(format!(
                "{}/{}/{}",
                J::TABLE,
                parent_id,
                child_id
            )));
        }
        Ok(())
    }

    /// Remove one member, returning the prior record if it existed.
    pub fn remove(&self, parent_id: &str, child_id: &str) -> Result<Option<J>, StoreError> {
        let prior = self.get(parent_id, child_id)?;
        if prior.is_some() {
            let sql = format!(
                "DELETE FROM {} WHERE {} = ?1 AND {} = ?2",
                J::TABLE,
                J::PARENT_COL,
                J::CHILD_COL,
            );
            self.sql.exec(
                &sql,
                &[
                    Value::Text(parent_id.to_string()),
                    Value::Text(child_id.to_string()),
                ],
            )?;
        }
        Ok(prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minierp_core::Audit;
    use minierp_sql::SqliteStore;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Link {
        left_id: String,
        right_id: String,
        weight: i64,
        #[serde(flatten)]
        audit: Audit,
    }

    impl AssocEntity for Link {
        const TABLE: &'static str = "links";
        const PARENT_COL: &'static str = "left_id";
        const CHILD_COL: &'static str = "right_id";

        fn parent_id(&self) -> &str {
            &self.left_id
        }

        fn child_id(&self) -> &str {
            &self.right_id
        }

        fn audit(&self) -> &Audit {
            &self.audit
        }

        fn audit_mut(&mut self) -> &mut Audit {
            &mut self.audit
        }
    }

    fn repo() -> AssocRepository<Link> {
        let sql = SqliteStore::open_in_memory().unwrap();
        sql.exec(
            "CREATE TABLE links (
                left_id TEXT NOT NULL,
                right_id TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (left_id, right_id)
            )",
            &[],
        )
        .unwrap();
        AssocRepository::new(Arc::new(sql))
    }

    fn link(left: &str, right: &str, weight: i64) -> Link {
        Link {
            left_id: left.into(),
            right_id: right.into(),
            weight,
            audit: Audit::now(None),
        }
    }

    #[test]
    fn put_list_get() {
        let repo = repo();
        repo.put(&link("a", "x", 1)).unwrap();
        repo.put(&link("a", "y", 2)).unwrap();
        repo.put(&link("b", "x", 3)).unwrap();

        let members = repo.list("a").unwrap();
        assert_eq!(members.len(), 2);

        let got = repo.get("a", "y").unwrap().unwrap();
        assert_eq!(got.weight, 2);

        // Member miss is a value, not an error.
        assert!(repo.get("a", "z").unwrap().is_none());
    }

    #[test]
    fn put_replaces_existing_pair() {
        let repo = repo();
        repo.put(&link("a", "x", 1)).unwrap();
        repo.put(&link("a", "x", 9)).unwrap();

        assert_eq!(repo.list("a").unwrap().len(), 1);
        assert_eq!(repo.get("a", "x").unwrap().unwrap().weight, 9);
    }

    #[test]
    fn update_and_remove() {
        let repo = repo();
        repo.put(&link("a", "x", 1)).unwrap();

        let mut rec = repo.get("a", "x").unwrap().unwrap();
        rec.weight = 5;
        rec.audit.touch(None);
        repo.update("a", "x", &rec).unwrap();
        assert_eq!(repo.get("a", "x").unwrap().unwrap().weight, 5);

        let removed = repo.remove("a", "x").unwrap().unwrap();
        assert_eq!(removed.weight, 5);
        assert!(repo.get("a", "x").unwrap().is_none());
        assert!(repo.remove("a", "x").unwrap().is_none());

        let ghost = link("a", "ghost", 1);
        assert!(matches!(
            repo.update("a", "ghost", &ghost),
            Err(StoreError::NotFound(_))
        ));
    }
}
