//! Storefront input lines.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use tienda::{
    commands::{Command, CommandError},
    products::ProductId,
};

use crate::catalog::NewProduct;

const IMAGE_FLAG: &str = "--image";

/// Errors raised while reading an input line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// A cart command could not be parsed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The action needs a product id and none was given.
    #[error("\"{0}\" needs a product id")]
    MissingProductId(&'static str),

    /// The product id is not a number.
    #[error("\"{0}\" is not a valid product id")]
    InvalidProductId(String),

    /// `new` was given no price.
    #[error("\"new\" needs a price and a name")]
    MissingPrice,

    /// The price is not a non-negative number.
    #[error("\"{0}\" is not a valid price")]
    InvalidPrice(String),

    /// `new` was given no name.
    #[error("\"new\" needs a product name")]
    MissingName,

    /// `--image` was given no file name.
    #[error("\"--image\" needs a file name")]
    MissingImage,
}

/// One storefront input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the product cards.
    ListProducts,

    /// Fetch and show one product from the catalog.
    ShowProduct(ProductId),

    /// Show the cart.
    ShowCart,

    /// A Cart Engine command.
    Cart(Command),

    /// Reload the catalog snapshot.
    Refresh,

    /// Add a product to the catalog.
    CreateProduct(NewProduct),

    /// Delete a product from the catalog.
    DeleteProduct(ProductId),

    /// Show usage.
    Help,

    /// Leave the storefront.
    Quit,
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();

        let Some(word) = words.next() else {
            return Err(CommandError::Empty.into());
        };

        match word.to_lowercase().as_str() {
            "products" | "productos" => Ok(Action::ListProducts),
            "cart" | "carrito" => Ok(Action::ShowCart),
            "show" => product_id("show", words.next()).map(Action::ShowProduct),
            "refresh" => Ok(Action::Refresh),
            "new" => new_product(words).map(Action::CreateProduct),
            "delete" => product_id("delete", words.next()).map(Action::DeleteProduct),
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" => Ok(Action::Quit),
            _ => Ok(Action::Cart(s.parse()?)),
        }
    }
}

fn product_id(action: &'static str, word: Option<&str>) -> Result<ProductId, ActionError> {
    let word = word.ok_or(ActionError::MissingProductId(action))?;

    word.parse()
        .map_err(|_ignored| ActionError::InvalidProductId(word.to_string()))
}

fn new_product<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<NewProduct, ActionError> {
    let price = words.next().ok_or(ActionError::MissingPrice)?;

    let price = Decimal::from_str(price)
        .ok()
        .filter(|price| !price.is_sign_negative())
        .ok_or_else(|| ActionError::InvalidPrice(price.to_string()))?;

    let mut name = Vec::new();
    let mut image = None;

    while let Some(word) = words.next() {
        if word == IMAGE_FLAG {
            image = Some(words.next().ok_or(ActionError::MissingImage)?.to_string());
        } else {
            name.push(word);
        }
    }

    if name.is_empty() {
        return Err(ActionError::MissingName);
    }

    Ok(NewProduct {
        name: name.join(" "),
        price,
        image,
    })
}
