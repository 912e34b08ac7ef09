//! Category entity module

pub mod dto;
pub mod model;

pub use dto::{CategoryRequest, CategoryResponse};
pub use model::Category;
