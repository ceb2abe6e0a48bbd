//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use tienda_app::domain::products::records::{ProductId, ProductRecord};

use crate::errors::ApiError;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;

/// Catalog product as served to storefront clients.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub(crate) struct ProductResponse {
    /// Product row id
    pub id: i64,

    /// Display name
    pub nombre: String,

    /// Unit price
    pub precio: f64,

    /// Image file name, relative to the storefront's `images/` directory
    pub imagen_url: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            nombre: product.name,
            precio: product.price,
            imagen_url: product.image,
        }
    }
}

/// Confirmation message body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Confirmation message
    pub message: String,
}

/// Read a product id from the path. Ids that are not numbers match no product.
pub(crate) fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map(ProductId::from_i64)
        .map_err(|_ignored| ApiError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert!(matches!(
            parse_product_id("42"),
            Ok(id) if id == ProductId::from_i64(42)
        ));
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        for raw in ["abc", "1.5", ""] {
            assert!(
                matches!(parse_product_id(raw), Err(ApiError::NotFound)),
                "{raw:?} should not name a product"
            );
        }
    }
}
