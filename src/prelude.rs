//! Tienda prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    commands::{Command, CommandError},
    engine::{CartEngine, Dispatch, EngineError, Intent, Outcome},
    prices::Price,
    products::{Product, ProductId},
    receipt::Receipt,
    view::{CartItems, CartLineView, CartView, ProductCard},
};
