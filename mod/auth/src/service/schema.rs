use minierp_sql::{SQLError, SQLStore};

/// DDL for the auth tables.
///
/// Each resource table stores the full JSON document in `data` with
/// indexed columns extracted for filtering; join tables are keyed by
/// their `(parent, child)` pair.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS roles (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS permissions (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        username TEXT,
        email TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS role_permissions (
        role_id TEXT NOT NULL,
        permission_id TEXT NOT NULL,
        data TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        PRIMARY KEY (role_id, permission_id)
    )",
    "CREATE TABLE IF NOT EXISTS user_roles (
        user_id TEXT NOT NULL,
        role_id TEXT NOT NULL,
        data TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        PRIMARY KEY (user_id, role_id)
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_roles_name ON roles(name)",
    "CREATE INDEX IF NOT EXISTS idx_permissions_name ON permissions(name)",
    "CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)",
    "CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), SQLError> {
    for ddl in SCHEMA {
        sql.exec(ddl, &[])?;
    }
    Ok(())
}
