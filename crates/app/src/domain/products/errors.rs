//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Errors raised by the [`ProductsService`](super::ProductsService).
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// No product has the requested id.
    #[error("product not found")]
    NotFound,

    /// A required column was missing.
    #[error("missing required data")]
    MissingRequiredData,

    /// A value was out of range, such as a negative price.
    #[error("invalid data")]
    InvalidData,

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}
