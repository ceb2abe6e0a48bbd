//! Product Records

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Product ID, the `IdProduct` row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw row id.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// The raw row id.
    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.into_i64()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Row id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Image file name, if any
    pub image: Option<String>,
}
