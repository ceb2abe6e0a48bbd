//! Products Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::domain::products::{
    data::NewProduct,
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Sqlite, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Sqlite, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        let id = query(CREATE_PRODUCT_SQL)
            .bind(product.name.as_str())
            .bind(product.price)
            .bind(product.image.as_deref())
            .execute(&mut **tx)
            .await?
            .last_insert_rowid();

        Ok(ProductRecord {
            id: ProductId::from_i64(id),
            name: product.name,
            price: product.price,
            image: product.image,
        })
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for ProductRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("IdProduct")?),
            name: row.try_get("NameP")?,
            price: row.try_get("Price")?,
            image: row.try_get("Image")?,
        })
    }
}
