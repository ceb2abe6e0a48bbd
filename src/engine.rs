//! Cart Engine
//!
//! Owns the cart and maps user intents onto cart operations. Every dispatch re-renders the
//! cart view from the new state.

use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    commands::Command,
    prices::Price,
    products::{Product, ProductId},
    receipt::Receipt,
    view::{self, CartView},
};

/// Errors raised while resolving a command against a product snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The product is not in the snapshot, so it cannot be added.
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

/// A cart operation, with products resolved from the catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    /// Add one unit of the product.
    Add(&'a Product),

    /// Drop the product's line.
    Remove(ProductId),

    /// Increase the product's quantity by one.
    Incr(ProductId),

    /// Decrease the product's quantity by one.
    Decr(ProductId),

    /// Buy everything in the cart.
    Checkout,
}

impl<'a> Intent<'a> {
    /// Resolve a command against the products of a catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownProduct`] when adding a product the snapshot does not
    /// contain.
    pub fn resolve(command: Command, products: &'a [Product]) -> Result<Self, EngineError> {
        Ok(match command {
            Command::Add(id) => Intent::Add(
                products
                    .iter()
                    .find(|product| product.id == id)
                    .ok_or(EngineError::UnknownProduct(id))?,
            ),
            Command::Remove(id) => Intent::Remove(id),
            Command::Incr(id) => Intent::Incr(id),
            Command::Decr(id) => Intent::Decr(id),
            Command::Checkout => Intent::Checkout,
        })
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The cart was updated (or left alone by a no-op).
    Updated,

    /// Checkout succeeded and the cart was cleared.
    CheckedOut(Receipt),

    /// The operation was refused; the cart is unchanged.
    Rejected(CartError),
}

/// Result of dispatching an intent: the outcome and the freshly rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// What happened
    pub outcome: Outcome,

    /// The cart view after the operation
    pub view: CartView,
}

/// Cart Engine
#[derive(Debug, Default)]
pub struct CartEngine {
    cart: Cart,
}

impl CartEngine {
    /// Create an engine with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an intent to the cart.
    pub fn dispatch(&mut self, intent: Intent<'_>) -> Dispatch {
        let outcome = match intent {
            Intent::Add(product) => {
                self.cart.add_item(product);

                Outcome::Updated
            }
            Intent::Remove(id) => {
                self.cart.remove_item(id);

                Outcome::Updated
            }
            Intent::Incr(id) => {
                self.cart.change_quantity(id, 1);

                Outcome::Updated
            }
            Intent::Decr(id) => {
                self.cart.change_quantity(id, -1);

                Outcome::Updated
            }
            Intent::Checkout => match self.cart.checkout() {
                Ok(receipt) => Outcome::CheckedOut(receipt),
                Err(error) => Outcome::Rejected(error),
            },
        };

        Dispatch {
            outcome,
            view: self.view(),
        }
    }

    /// Render the current cart.
    pub fn view(&self) -> CartView {
        view::render(&self.cart)
    }

    /// Current cart total.
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// The cart owned by this engine.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}
