//! HTTP client for the Catalog Service.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use tienda::products::{Product, ProductId};

use super::{Catalog, CatalogError, NewProduct};

/// Catalog Service client over its JSON API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Create a client for the service at `base_url`, e.g. `"http://localhost:3000"`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(self.url("productos")).send().await?;

        read_body(response).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = self
            .http
            .get(self.url(&format!("producto/{id}")))
            .send()
            .await?;

        read_body(response).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductId, CatalogError> {
        let response = self
            .http
            .post(self.url("agregar-producto"))
            .json(&product)
            .send()
            .await?;

        let created: CreatedBody = read_body(response).await?;

        debug!(id = created.id, "{}", created.message);

        Ok(ProductId::new(created.id))
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let response = self
            .http
            .delete(self.url(&format!("eliminar-producto/{id}")))
            .send()
            .await?;

        let deleted: MessageBody = read_body(response).await?;

        debug!(%id, "{}", deleted.message);

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CreatedBody {
    message: String,
    id: i64,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();

    warn!(status = status.as_u16(), "catalog request failed: {text}");

    Err(failure(status, &text))
}

/// Map an unsuccessful response to a [`CatalogError`], preferring the body's `error` message.
fn failure(status: StatusCode, body: &str) -> CatalogError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_ignored| format!("unexpected status {status}"));

    match status {
        StatusCode::NOT_FOUND => CatalogError::NotFound,
        status if status.is_client_error() => CatalogError::Rejected(message),
        _ => CatalogError::Storage(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_not_found() {
        assert_eq!(
            failure(
                StatusCode::NOT_FOUND,
                r#"{"error":"Producto no encontrado"}"#
            ),
            CatalogError::NotFound
        );
    }

    #[test]
    fn server_error_carries_message() {
        assert_eq!(
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Error interno del servidor"}"#
            ),
            CatalogError::Storage("Error interno del servidor".to_string())
        );
    }

    #[test]
    fn bad_request_is_rejected() {
        assert_eq!(
            failure(
                StatusCode::BAD_REQUEST,
                r#"{"error":"Datos del producto inválidos"}"#
            ),
            CatalogError::Rejected("Datos del producto inválidos".to_string())
        );
    }

    #[test]
    fn unreadable_error_body_falls_back_to_status() {
        assert_eq!(
            failure(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            CatalogError::Storage("unexpected status 502 Bad Gateway".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = CatalogClient::new("http://localhost:3000/");

        assert_eq!(client.url("productos"), "http://localhost:3000/api/productos");
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        let client = CatalogClient::new("http://127.0.0.1:1");

        let result = client.list_products().await;

        assert!(
            matches!(result, Err(CatalogError::Unavailable(_))),
            "expected unavailable, got {result:?}"
        );
    }
}
