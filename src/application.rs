//! Application layer module
//!
//! Orchestration of domain results into the output document.

pub mod transform;

pub use transform::JsonTransformer;
