//! Git operations module
//!
//! Handles provider resolution, remote URL construction and the sparse
//! checkout step sequence

pub mod provider;
pub mod repository;
pub mod sparse_checkout;

pub use provider::*;
pub use repository::*;
pub use sparse_checkout::*;
