//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tienda_app::domain::products::data::NewProduct;

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Display name
    pub nombre: String,

    /// Unit price
    pub precio: f64,

    /// Optional image file name
    #[serde(default)]
    pub imagen: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.nombre,
            price: request.precio,
            image: request.imagen.filter(|image| !image.trim().is_empty()),
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Confirmation message
    pub message: String,

    /// Id assigned to the new product
    pub id: i64,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_api_error)?
        .id;

    res.add_header(LOCATION, format!("/api/producto/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        message: "Producto agregado".to_string(),
        id: id.into_i64(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tienda_app::{
        database::SqlxError,
        domain::products::{MockProductsService, ProductsServiceError},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/agregar-producto").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Arroz 1kg".to_string(),
                    price: 18.5,
                    image: Some("arroz.png".to_string()),
                }
            })
            .return_once(|_| Ok(make_product(12)));

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/api/agregar-producto")
            .json(&json!({ "nombre": "Arroz 1kg", "precio": 18.5, "imagen": "arroz.png" }))
            .send(&make_service(repo))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/producto/12"));
        assert_eq!(body.message, "Producto agregado");
        assert_eq!(body.id, 12);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_without_image() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.image.is_none() && new.name == "Agua")
            .return_once(|_| Ok(make_product(3)));

        let res = TestClient::post("http://example.com/api/agregar-producto")
            .json(&json!({ "nombre": "Agua", "precio": 10 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData));

        let mut res = TestClient::post("http://example.com/api/agregar-producto")
            .json(&json!({ "nombre": "Arroz", "precio": -1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Datos del producto inválidos");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_fields_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/api/agregar-producto")
            .add_header("accept", "text/html", true)
            .json(&json!({ "precio": 5 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Solicitud inválida");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_json_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/api/agregar-producto")
            .raw_json("{\"nombre\": ")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Solicitud inválida");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_storage_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(SqlxError::PoolTimedOut)));

        let mut res = TestClient::post("http://example.com/api/agregar-producto")
            .json(&json!({ "nombre": "Arroz", "precio": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "Error interno del servidor");

        Ok(())
    }
}
