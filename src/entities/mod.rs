//! Entities module - contains the business resources
//!
//! Each resource provides a plain domain model implementing
//! [`Resource`](crate::core::Resource) and a `dto` module mapping it to and
//! from its HTTP request/response shapes.

pub mod category;
pub mod order;

// Re-export models for convenience
pub use category::{Category, CategoryRequest, CategoryResponse};
pub use order::{Order, OrderRequest, OrderResponse};
