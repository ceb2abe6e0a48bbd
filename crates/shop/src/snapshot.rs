//! Product Snapshot
//!
//! The storefront's cached copy of the catalog. Loading never fails: when the Catalog Service
//! cannot be read the snapshot is degraded and holds no products.

use tracing::{info, warn};

use tienda::products::{Product, ProductId};

use crate::catalog::{Catalog, CatalogError};

/// Catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// Products as listed by the catalog at load time.
    Loaded(Vec<Product>),

    /// The last load failed.
    Degraded(CatalogError),
}

impl Snapshot {
    /// Load a fresh snapshot.
    pub async fn load<C: Catalog + ?Sized>(catalog: &C) -> Self {
        match catalog.list_products().await {
            Ok(products) => {
                info!(products = products.len(), "catalog snapshot loaded");

                Snapshot::Loaded(products)
            }
            Err(error) => {
                warn!("failed to load catalog snapshot: {error}");

                Snapshot::Degraded(error)
            }
        }
    }

    /// Products in the snapshot; none when degraded.
    pub fn products(&self) -> &[Product] {
        match self {
            Snapshot::Loaded(products) => products,
            Snapshot::Degraded(_) => &[],
        }
    }

    /// Look a product up by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|product| product.id == id)
    }

    /// Whether the last load failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Snapshot::Degraded(_))
    }
}
