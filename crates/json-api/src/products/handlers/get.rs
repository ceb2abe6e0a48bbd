//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::{ProductResponse, parse_product_id},
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(parse_product_id(&id.into_inner())?)
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
