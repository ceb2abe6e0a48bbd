//! Products

use std::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

use crate::prices::Price;

/// Product identifier assigned by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw catalog identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw catalog identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Product
///
/// A read-only snapshot of a catalog product, as listed by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: ProductId,

    /// Product name, empty when the catalog has none
    #[serde(rename = "nombre", default, deserialize_with = "nullable_name")]
    pub name: String,

    /// Unit price, zero when the catalog value is missing or unusable
    #[serde(rename = "precio", default, deserialize_with = "lenient_price")]
    pub price: Price,

    /// Image file name, relative to the storefront image directory
    #[serde(rename = "imagen_url", default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product snapshot without an image.
    pub fn new(id: i64, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: price.into(),
            image: None,
        }
    }

    /// Attach an image file name.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

fn nullable_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientPrice)
}

/// Accepts numbers and numeric strings; anything else reads as zero.
struct LenientPrice;

impl<'de> Visitor<'de> for LenientPrice {
    type Value = Price;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a price")
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Price, E> {
        Ok(Price::ZERO)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Price, E> {
        Ok(Price::new(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
        Ok(Price::new(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Price, E> {
        Ok(Decimal::from_f64(value).map_or(Price::ZERO, Price::new))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Price, E> {
        Ok(value
            .trim()
            .parse::<Decimal>()
            .map_or(Price::ZERO, Price::new))
    }

    fn visit_none<E: de::Error>(self) -> Result<Price, E> {
        Ok(Price::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Price, E> {
        Ok(Price::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Price, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Price, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(Price::ZERO)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Price, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}

        Ok(Price::ZERO)
    }
}
