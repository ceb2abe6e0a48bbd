//! Receipt

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::prices::Price;

/// Outcome of a completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Total captured at checkout
    total: Price,

    /// Number of units bought
    units: u64,

    /// Number of distinct products bought
    lines: usize,
}

impl Receipt {
    /// Create a new receipt with the given details.
    #[must_use]
    pub fn new(total: Price, units: u64, lines: usize) -> Self {
        Self {
            total,
            units,
            lines,
        }
    }

    /// Total amount paid
    #[must_use]
    pub fn total(&self) -> Price {
        self.total
    }

    /// Number of units bought
    #[must_use]
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Number of distinct products bought
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl Display for Receipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Compra realizada. Total: ${}", self.total)
    }
}
