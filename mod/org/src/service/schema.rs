use minierp_sql::{SQLError, SQLStore};

/// DDL for the org tables.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS companies (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS departments (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        company_id TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS jobs (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        department_id TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_departments_company ON departments(company_id)",
    "CREATE INDEX IF NOT EXISTS idx_jobs_department ON jobs(department_id)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), SQLError> {
    for ddl in SCHEMA {
        sql.exec(ddl, &[])?;
    }
    Ok(())
}
