//! Category domain model

use crate::core::resource::{Resource, ResourceId};

/// A product category, unique by name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: Option<ResourceId>,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Create an unsaved category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl Resource for Category {
    const ENTITY_NAME: &'static str = "Category";
    const COLLECTION_NAME: &'static str = "categories";
    const UNIQUE_FIELD: &'static str = "name";

    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn set_id(&mut self, id: ResourceId) {
        self.id = Some(id);
    }

    fn unique_key(&self) -> &str {
        &self.name
    }

    fn apply_update(&mut self, candidate: Self) {
        self.name = candidate.name;
        self.description = candidate.description;
    }
}
