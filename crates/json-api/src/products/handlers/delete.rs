//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::{MessageResponse, parse_product_id},
    },
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .delete_product(parse_product_id(&id.into_inner())?)
        .await
        .map_err(into_api_error)?;

    Ok(Json(MessageResponse {
        message: "Producto eliminado correctamente".to_string(),
    }))
}
