//! Core operations module
//!
//! Runs the sparse clone sequence and renders dry-run plans

pub mod plan;
pub mod sparse_clone;

pub use plan::*;
pub use sparse_clone::*;
