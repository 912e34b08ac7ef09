//! Entity registry for managing resource descriptors and their CRUD routes

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// [`ResourceDescriptor`](super::exposure::rest::ResourceDescriptor) is the
/// implementation used for every mapped resource.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (e.g., "Category")
    fn entity_type(&self) -> &str;

    /// The plural collection name (e.g., "categories")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this entity
    fn build_routes(&self) -> Router;
}

/// Registry for all entities exposed by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor, keyed by its collection name
    ///
    /// Registering the same collection twice replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let plural = descriptor.plural().to_string();
        if self.descriptors.insert(plural.clone(), descriptor).is_some() {
            tracing::warn!(collection = %plural, "replacing registered entity descriptor");
        }
    }

    /// Merge the routes of every registered entity
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity type names, ordered by collection
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.values().map(|d| d.entity_type()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
