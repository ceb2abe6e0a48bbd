//! Database connection management

use std::str::FromStr;

use sqlx::{
    Sqlite, SqlitePool, Transaction, query,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

pub use sqlx::Error as SqlxError;

/// Creates the products table when it does not exist yet.
pub const CREATE_PRODUCTS_TABLE_SQL: &str = include_str!("sql/create_products_table.sql");

/// Shared handle on the catalog connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Wrap an open pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Connect to `SQLite`, creating the database file if it is missing.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePool::connect_with(options).await
}

/// Connect to a private in-memory database.
///
/// The pool holds a single connection that is never recycled, since every `SQLite`
/// in-memory connection is its own database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Create the `Products` table if it does not exist.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    query(CREATE_PRODUCTS_TABLE_SQL).execute(pool).await?;

    info!("products table ready");

    Ok(())
}
