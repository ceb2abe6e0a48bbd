//! Tienda storefront
//!
//! Terminal storefront for the Tienda catalog: loads a product snapshot from the Catalog
//! Service and drives a [`tienda::engine::CartEngine`] from typed commands.

pub mod catalog;
pub mod config;
pub mod snapshot;
pub mod storefront;
