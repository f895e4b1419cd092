//! Domain module - product entities scraped from the catalogue
//!
//! Each module is its own file in the domain/ directory; public exports
//! are defined here for convenience.

pub mod product;

pub use product::{Product, ProductKind};
