//! Storage trait implementations for org models.

use minierp_core::Audit;
use minierp_sql::Value;
use minierp_store::Entity;

use crate::model::*;

fn opt_text(v: &Option<String>) -> Value {
    match v {
        Some(s) => Value::Text(s.clone()),
        None => Value::Null,
    }
}

impl Entity for Company {
    const TABLE: &'static str = "companies";
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

impl Entity for Department {
    const TABLE: &'static str = "departments";
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

impl Entity for Job {
    const TABLE: &'static str = "jobs";
    const COLUMNS: &'static [&'static str] = &["name", "department_id"];

    fn id(&self) -> &str {
        &self.id
    }

    fn index_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::Text(self.name.clone())),
            ("department_id", opt_text(&self.department_id)),
        ]
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}
