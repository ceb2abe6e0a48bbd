//! Tienda
//!
//! Tienda is the cart engine of a small grocery storefront: an in-memory, insertion-ordered
//! shopping cart fed by product snapshots from a remote catalog, with derived totals, a pure
//! view projection and a simulated checkout.

pub mod cart;
pub mod commands;
pub mod engine;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod receipt;
pub mod view;
