//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::SqliteProductsRepository,
    },
};

/// [`ProductsService`] backed by the `SQLite` `Products` table.
#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    /// Create the service over a database handle.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Catalog product operations.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, in id order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Stores a new product and returns it with its assigned id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes the product with the given id.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_product(name: &str, price: f64, image: Option<&str>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            image: image.map(ToString::to_string),
        }
    }

    #[tokio::test]
    async fn create_product_assigns_id_and_keeps_fields() -> TestResult {
        let ctx = TestContext::new().await?;

        let product = ctx
            .products
            .create_product(new_product("Arroz 1kg", 18.5, Some("arroz.jpg")))
            .await?;

        assert_eq!(product.id, ProductId::from_i64(1));
        assert_eq!(product.name, "Arroz 1kg");
        assert!((product.price - 18.5).abs() < f64::EPSILON, "price kept");
        assert_eq!(product.image.as_deref(), Some("arroz.jpg"));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx
            .products
            .create_product(new_product("Aceite 1L", 45.0, None))
            .await?;

        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product, created);
        assert!(product.image.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx.products.get_product(ProductId::from_i64(42)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_returns_created_products_in_id_order() -> TestResult {
        let ctx = TestContext::new().await?;

        let arroz = ctx
            .products
            .create_product(new_product("Arroz 1kg", 18.5, Some("arroz.jpg")))
            .await?;

        let azucar = ctx
            .products
            .create_product(new_product("Azúcar 1kg", 20.0, Some("azucar.jpg")))
            .await?;

        let products = ctx.products.list_products().await?;

        assert_eq!(products, vec![arroz, azucar]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await?;

        let products = ctx.products.list_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejects_invalid_data() -> TestResult {
        let ctx = TestContext::new().await?;

        let blank = ctx.products.create_product(new_product("", 1.0, None)).await;
        let negative = ctx
            .products
            .create_product(new_product("Frijol", -1.0, None))
            .await;

        assert!(
            matches!(blank, Err(ProductsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {blank:?}"
        );
        assert!(
            matches!(negative, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {negative:?}"
        );
        assert!(ctx.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let product = ctx
            .products
            .create_product(new_product("Sal", 12.0, None))
            .await?;

        ctx.products.delete_product(product.id).await?;

        let result = ctx.products.get_product(product.id).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_id_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx.products.delete_product(ProductId::from_i64(7)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
