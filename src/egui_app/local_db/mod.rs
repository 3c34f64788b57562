//! # Local Database Module
//!
//! Device key-value storage for the catalog, backed by a single SQLite table.
//! Every value is an opaque string replaced wholesale on write, so a single
//! `set_item` is atomic with respect to the storage medium.
//!
//! ## Key Components
//!
//! - `LocalDatabase`: connection pool, schema setup and the key-value API
//! - `schema.rs`: table definitions and migration bookkeeping
//! - `products.rs`: the product collection stored under the `products` key
//!
//! ## Usage
//!
//! ```rust,no_run
//! use product_catalog::egui_app::local_db::LocalDatabase;
//!
//! # async fn example() -> Result<(), product_catalog::shared::StorageError> {
//! let db = LocalDatabase::open_default().await?;
//! db.set_item("isLoggedIn", "true").await?;
//! assert_eq!(db.get_item("isLoggedIn").await?.as_deref(), Some("true"));
//! # Ok(())
//! # }
//! ```

pub mod schema;
pub mod products;

pub use products::{ProductStore, PRODUCTS_KEY};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::shared::StorageError;

/// Result type for local database operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// File name of the on-disk store inside the data directory
pub const DB_FILE_NAME: &str = "catalog.db";

/// Local key-value store
///
/// Cloning is cheap and shares the underlying pool.
#[derive(Debug, Clone)]
pub struct LocalDatabase {
    pool: SqlitePool,
}

impl LocalDatabase {
    /// Open or create the store in the platform data directory
    pub async fn open_default() -> Result<Self> {
        Self::open(Self::default_path()).await
    }

    /// Open or create the store inside `dir`
    pub async fn open_in(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(dir.as_ref().join(DB_FILE_NAME)).await
    }

    /// Open or create the database file at `path`
    ///
    /// Uses WAL mode so readers never block the single writer.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        tracing::info!(path = %path.display(), "Opened local store");

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Open a private in-memory store
    ///
    /// The pool is pinned to one connection that never expires, since each
    /// SQLite in-memory connection is its own database.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    /// Platform-specific location of the store file
    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("product-catalog");
        path.push(DB_FILE_NAME);
        path
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(schema::CREATE_MIGRATIONS_TABLE)
            .execute(&self.pool)
            .await?;

        let current_version = self.schema_version().await?;
        if !schema::needs_migration(current_version) {
            return Ok(());
        }
        tracing::info!(
            from = current_version,
            to = schema::CURRENT_SCHEMA_VERSION,
            "Migrating local store"
        );

        for migration in schema::pending_migrations(current_version) {
            let mut tx = self.pool.begin().await?;
            sqlx::query(migration.sql).execute(&mut *tx).await?;
            sqlx::query("INSERT INTO schema_migrations (version, applied_at) VALUES (?, ?)")
                .bind(migration.version)
                .bind(chrono::Utc::now().to_rfc3339())
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;
            tracing::debug!(
                version = migration.version,
                description = migration.description,
                "Applied schema migration"
            );
        }

        Ok(())
    }

    /// Read the value stored under `key`
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    /// Replace the value stored under `key`
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove `key`; absent keys are not an error
    pub async fn remove_item(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Current schema version recorded in the migrations table
    pub async fn schema_version(&self) -> Result<i32> {
        let version =
            sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_migrations")
                .fetch_one(&self.pool)
                .await?;
        Ok(version)
    }

    /// Get connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
