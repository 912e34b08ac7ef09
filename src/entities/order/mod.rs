//! Order entity module

pub mod dto;
pub mod model;

pub use dto::{OrderRequest, OrderResponse};
pub use model::Order;
