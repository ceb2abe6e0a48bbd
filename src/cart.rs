//! Cart

use thiserror::Error;

use crate::{
    prices::Price,
    products::{Product, ProductId},
    receipt::Receipt,
};

/// Errors related to cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Checkout was attempted with no lines in the cart.
    #[error("cart is empty")]
    Empty,
}

/// One product's entry in the cart, with the name and price captured when it was first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Price,
    quantity: u32,
}

impl CartLine {
    fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// Catalog identifier of the product on this line.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name at the time it was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price at the time it was added.
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Number of units, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Cart
///
/// Insertion-ordered cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// A product already in the cart has its quantity increased; otherwise a new line is
    /// appended with the product's current name and price.
    pub fn add_item(&mut self, product: &Product) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product)),
        }
    }

    /// Remove the line for `product`, if there is one.
    pub fn remove_item(&mut self, product: ProductId) {
        self.lines.retain(|line| line.product_id != product);
    }

    /// Adjust the quantity of `product` by `delta`.
    ///
    /// The line is removed when its quantity would fall to zero or below. Products not in the
    /// cart are ignored.
    pub fn change_quantity(&mut self, product: ProductId, delta: i64) {
        let Some(line) = self.line_mut(product) else {
            return;
        };

        let quantity = i64::from(line.quantity).saturating_add(delta);

        if quantity <= 0 {
            self.remove_item(product);
        } else {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Calculate the total of the cart.
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Check out the cart.
    ///
    /// Captures the total in a [`Receipt`] and empties the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] without touching the cart if there is nothing to buy.
    pub fn checkout(&mut self) -> Result<Receipt, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }

        let receipt = Receipt::new(self.total(), self.units(), self.len());

        self.lines.clear();

        Ok(receipt)
    }

    /// Get the line for a product.
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product)
    }

    fn line_mut(&mut self, product: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product)
    }

    /// Lines in the order their products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
