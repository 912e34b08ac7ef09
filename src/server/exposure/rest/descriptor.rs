//! Route descriptor for a mapped resource

use super::handlers::{
    ResourceState, create_resource, delete_resource, get_resource, list_resources,
    update_resource,
};
use super::mapper::ResourceMapper;
use crate::core::service::ResourceService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Exposes one resource under `/api/{collection}`
pub struct ResourceDescriptor<T> {
    service: Arc<dyn ResourceService<T>>,
}

impl<T: ResourceMapper> ResourceDescriptor<T> {
    pub fn new(service: Arc<dyn ResourceService<T>>) -> Self {
        Self { service }
    }
}

impl<T: ResourceMapper> EntityDescriptor for ResourceDescriptor<T> {
    fn entity_type(&self) -> &str {
        T::ENTITY_NAME
    }

    fn plural(&self) -> &str {
        T::COLLECTION_NAME
    }

    fn build_routes(&self) -> Router {
        let state = ResourceState {
            service: self.service.clone(),
        };
        let collection = format!("/api/{}", T::COLLECTION_NAME);
        let item = format!("{}/{{id}}", collection);

        Router::new()
            .route(&collection, get(list_resources::<T>).post(create_resource::<T>))
            .route(
                &item,
                get(get_resource::<T>)
                    .put(update_resource::<T>)
                    .delete(delete_resource::<T>),
            )
            .with_state(state)
    }
}
