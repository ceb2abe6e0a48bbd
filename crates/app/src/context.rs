//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::products::{ProductsService, SqliteProductsService},
};

/// Errors raised while building the [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database could not be opened.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// The `Products` table could not be created.
    #[error("failed to prepare database schema")]
    Schema(#[source] sqlx::Error),
}

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Catalog products service.
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or preparing its schema fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Schema)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Build application context over an existing database handle.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(SqliteProductsService::new(db)),
        }
    }
}
