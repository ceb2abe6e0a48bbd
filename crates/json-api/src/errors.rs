//! API Errors

use salvo::{
    catcher::Catcher,
    handler,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{FlowCtrl, Json, Response, Scribe},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Errors rendered as `{"error": "..."}` JSON bodies.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Producto no encontrado")]
    NotFound,

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("Error interno del servidor")]
    Internal,
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse {
            error: self.to_string(),
        }));
    }
}

/// Rewrites error responses produced outside the handlers (extractor rejections, unknown
/// routes, caught panics) into the same `{"error": "..."}` body.
#[handler]
async fn error_body(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = match status {
        StatusCode::BAD_REQUEST => "Solicitud inválida".to_string(),
        StatusCode::NOT_FOUND => "Recurso no encontrado".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::Internal.to_string(),
        other => other.canonical_reason().unwrap_or("Error").to_string(),
    };

    res.render(Json(ErrorResponse { error: message }));
    ctrl.skip_rest();
}

/// Catcher rendering every uncaught error status as an [`ErrorResponse`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(error_body)
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}
