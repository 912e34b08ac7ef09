//! Category request/response shapes and their mapping to the domain model

use super::model::Category;
use crate::core::resource::ResourceId;
use crate::core::validation::not_blank;
use crate::server::exposure::rest::ResourceMapper;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/categories` and `PUT /api/categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
}

/// Category as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
}

impl ResourceMapper for Category {
    type Request = CategoryRequest;
    type Response = CategoryResponse;

    fn from_request(request: CategoryRequest) -> Self {
        Category::new(request.name, request.description)
    }

    fn merge_request(&mut self, request: CategoryRequest) {
        self.name = request.name;
        self.description = request.description;
    }

    fn to_response(&self) -> CategoryResponse {
        CategoryResponse {
            id: self.id.unwrap_or_default(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
