//! Catalog
//!
//! The narrow interface the storefront uses to reach the Catalog Service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use tienda::products::{Product, ProductId};

mod client;

pub use client::CatalogClient;

/// Errors raised while talking to the Catalog Service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The service could not be reached, or its response could not be read.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The product does not exist.
    #[error("Producto no encontrado")]
    NotFound,

    /// The service refused the request payload.
    #[error("{0}")]
    Rejected(String),

    /// The service failed to serve the request.
    #[error("{0}")]
    Storage(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        CatalogError::Unavailable(error.to_string())
    }
}

/// A product to add to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Unit price
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Optional image file name
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Catalog Service operations.
#[automock]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch every product.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Add a product, returning its assigned id.
    async fn create_product(&self, product: NewProduct) -> Result<ProductId, CatalogError>;

    /// Remove a product.
    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError>;
}
