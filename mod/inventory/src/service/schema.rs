use minierp_sql::{SQLError, SQLStore};

/// DDL for the inventory tables.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS types (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS stocks (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS items (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        category_id TEXT,
        price REAL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS warehouses (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        company_id TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS suppliers (
        id TEXT PRIMARY KEY,
        data TEXT NOT NULL,
        name TEXT,
        contact TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        deleted_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS item_types (
        item_id TEXT NOT NULL,
        type_id TEXT NOT NULL,
        data TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        PRIMARY KEY (item_id, type_id)
    )",
    "CREATE TABLE IF NOT EXISTS warehouse_items (
        warehouse_id TEXT NOT NULL,
        item_id TEXT NOT NULL,
        data TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        PRIMARY KEY (warehouse_id, item_id)
    )",
    // Indexes
    "CREATE INDEX IF NOT EXISTS idx_items_name ON items(name)",
    "CREATE INDEX IF NOT EXISTS idx_items_category ON items(category_id)",
    "CREATE INDEX IF NOT EXISTS idx_items_price ON items(price)",
    "CREATE INDEX IF NOT EXISTS idx_warehouses_company ON warehouses(company_id)",
    "CREATE INDEX IF NOT EXISTS idx_suppliers_name ON suppliers(name)",
];

pub fn init_schema(sql: &dyn SQLStore) -> Result<(), SQLError> {
    for ddl in SCHEMA {
        sql.exec(ddl, &[])?;
    }
    Ok(())
}
