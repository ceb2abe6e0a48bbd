//! Tienda Domain Concerns

pub mod products;
