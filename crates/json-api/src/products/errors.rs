//! Product Errors

use tracing::error;

use tienda_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::NotFound,
        ProductsServiceError::MissingRequiredData => {
            ApiError::BadRequest("Faltan datos del producto")
        }
        ProductsServiceError::InvalidData => ApiError::BadRequest("Datos del producto inválidos"),
        ProductsServiceError::Sql(source) => {
            error!("products storage failure: {source}");

            ApiError::Internal
        }
    }
}
