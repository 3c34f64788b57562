//! Store Schema
//!
//! The store is one key-value table. Each migration is applied once, inside
//! its own transaction, and recorded in `schema_migrations`.

/// One schema step
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// Bookkeeping table, created before any migration runs
pub const CREATE_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
)";

/// Every migration, in ascending version order
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "key-value table",
    sql: "CREATE TABLE IF NOT EXISTS kv_store (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
}];

/// Version a fully migrated store reports
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

pub fn needs_migration(current_version: i32) -> bool {
    current_version < CURRENT_SCHEMA_VERSION
}

/// Migrations newer than `current_version`
pub fn pending_migrations(current_version: i32) -> impl Iterator<Item = &'static Migration> {
    MIGRATIONS.iter().filter(move |m| m.version > current_version)
}
