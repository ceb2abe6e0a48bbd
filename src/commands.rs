//! Commands
//!
//! Textual user intents for the cart: `add <id>`, `remove <id>`, `incr <id>`, `decr <id>` and
//! `checkout`.

use std::str::FromStr;

use thiserror::Error;

use crate::products::ProductId;

/// Errors raised while parsing a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was entered.
    #[error("no command given")]
    Empty,

    /// The command word is not recognised.
    #[error("unknown command \"{0}\"")]
    Unknown(String),

    /// The command needs a product id and none was given.
    #[error("\"{0}\" needs a product id")]
    MissingProductId(&'static str),

    /// The product id is not a number.
    #[error("\"{0}\" is not a valid product id")]
    InvalidProductId(String),

    /// More arguments than the command accepts.
    #[error("unexpected argument \"{0}\"")]
    UnexpectedArgument(String),
}

/// A user intent on the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of a catalog product.
    Add(ProductId),

    /// Drop a product's line.
    Remove(ProductId),

    /// One more unit of a product already in the cart.
    Incr(ProductId),

    /// One less unit of a product already in the cart.
    Decr(ProductId),

    /// Buy everything in the cart.
    Checkout,
}

impl Command {
    /// The command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Remove(_) => "remove",
            Command::Incr(_) => "incr",
            Command::Decr(_) => "decr",
            Command::Checkout => "checkout",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();

        let word = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        let command = match word.as_str() {
            "add" => Command::Add(product_id("add", words.next())?),
            "remove" => Command::Remove(product_id("remove", words.next())?),
            "incr" | "+" => Command::Incr(product_id("incr", words.next())?),
            "decr" | "-" => Command::Decr(product_id("decr", words.next())?),
            "checkout" => Command::Checkout,
            _ => return Err(CommandError::Unknown(word)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn product_id(command: &'static str, arg: Option<&str>) -> Result<ProductId, CommandError> {
    let arg = arg.ok_or(CommandError::MissingProductId(command))?;

    arg.parse()
        .map_err(|_err| CommandError::InvalidProductId(arg.to_string()))
}
