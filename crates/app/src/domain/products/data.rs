//! Products Data

use crate::domain::products::errors::ProductsServiceError;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name, stored in `NameP`
    pub name: String,

    /// Unit price, stored in `Price`
    pub price: f64,

    /// Optional image file name, stored in `Image`
    pub image: Option<String>,
}

impl NewProduct {
    /// Check the product can be stored.
    ///
    /// # Errors
    ///
    /// - [`ProductsServiceError::MissingRequiredData`] when the name is blank.
    /// - [`ProductsServiceError::InvalidData`] when the price is negative or not finite.
    pub fn validate(&self) -> Result<(), ProductsServiceError> {
        if self.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductsServiceError::InvalidData);
        }

        Ok(())
    }
}
