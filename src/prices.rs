//! Prices

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    iter::Sum,
    ops::Deref,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// A non-negative amount of money, held as an exact decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Zero
    pub const ZERO: Price = Price {
        value: Decimal::ZERO,
    };

    /// Creates a new price. Negative amounts are not valid prices and become zero.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        if value < Decimal::ZERO {
            Self::ZERO
        } else {
            Price { value }
        }
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Price {
            value: self.value.saturating_mul(Decimal::from(quantity)),
        }
    }

    /// The amount rounded half away from zero and fixed at two decimal places.
    #[must_use]
    pub fn rounded(self) -> Decimal {
        let mut rounded = self
            .value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        rounded.rescale(2);

        rounded
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.rounded(), f)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, price| Price {
            value: acc.value.saturating_add(price.value),
        })
    }
}
