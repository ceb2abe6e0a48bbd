//! Test context for service-level tests against an in-memory database.

use crate::{
    database::{self, Db},
    domain::products::SqliteProductsService,
};

pub(crate) struct TestContext {
    pub(crate) products: SqliteProductsService,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, sqlx::Error> {
        let pool = database::connect_in_memory().await?;

        database::ensure_schema(&pool).await?;

        Ok(Self {
            products: SqliteProductsService::new(Db::new(pool)),
        })
    }
}
