//! Business-facing service contract for resources
//!
//! Services expose the five CRUD operations to adapters and declare the
//! atomic-unit boundaries: each write runs inside one [`UnitOfWork`] that is
//! committed on success and rolled back on any error.

use crate::core::datasource::ResourceDatasource;
use crate::core::error::{ResourceError, ResourceResult};
use crate::core::repository::{Store, UnitOfWork};
use crate::core::resource::{Resource, ResourceId};
use async_trait::async_trait;
use std::sync::Arc;

/// Service trait for managing one resource type
///
/// Adapters depend on this contract only; the datasource's error
/// translation and the store's transaction handling stay behind it.
#[async_trait]
pub trait ResourceService<T: Resource>: Send + Sync {
    /// List all entities
    async fn find_all(&self) -> ResourceResult<Vec<T>>;

    /// Get an entity by ID
    async fn find_by_id(&self, id: ResourceId) -> ResourceResult<T>;

    /// Create a new entity (atomic)
    async fn save(&self, entity: T) -> ResourceResult<T>;

    /// Update an existing entity (atomic)
    async fn update(&self, entity: T, id: ResourceId) -> ResourceResult<T>;

    /// Delete an entity (atomic)
    async fn delete_by_id(&self, id: ResourceId) -> ResourceResult<()>;
}

/// [`ResourceService`] backed by a [`Store`]
pub struct StoreService<T: Resource> {
    store: Arc<dyn Store<T>>,
}

impl<T: Resource> Clone for StoreService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Resource> StoreService<T> {
    pub fn new(store: impl Store<T> + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<dyn Store<T>>) -> Self {
        Self { store }
    }

    async fn begin(&self) -> ResourceResult<Box<dyn UnitOfWork<T>>> {
        self.store.begin().await.map_err(|e| {
            ResourceError::database(format!(
                "Error starting transaction for {}: {}",
                T::COLLECTION_NAME,
                e
            ))
        })
    }

    /// Commit `unit` when `outcome` succeeded, roll it back otherwise
    async fn finish<R>(
        unit: Box<dyn UnitOfWork<T>>,
        outcome: ResourceResult<R>,
    ) -> ResourceResult<R> {
        match outcome {
            Ok(value) => {
                unit.commit().await.map_err(|e| {
                    ResourceError::database(format!(
                        "Error committing {} transaction: {}",
                        T::COLLECTION_NAME,
                        e
                    ))
                })?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = unit.rollback().await {
                    tracing::warn!(
                        entity = T::ENTITY_NAME,
                        error = %rollback_err,
                        "rollback failed"
                    );
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceService<T> for StoreService<T> {
    async fn find_all(&self) -> ResourceResult<Vec<T>> {
        ResourceDatasource::new(self.store.repository())
            .find_all()
            .await
    }

    async fn find_by_id(&self, id: ResourceId) -> ResourceResult<T> {
        ResourceDatasource::new(self.store.repository())
            .find_by_id(id)
            .await
    }

    async fn save(&self, entity: T) -> ResourceResult<T> {
        let unit = self.begin().await?;
        let outcome = ResourceDatasource::new(unit.as_repository())
            .save(entity)
            .await;
        Self::finish(unit, outcome).await
    }

    async fn update(&self, entity: T, id: ResourceId) -> ResourceResult<T> {
        let unit = self.begin().await?;
        let outcome = ResourceDatasource::new(unit.as_repository())
            .update(entity, id)
            .await;
        Self::finish(unit, outcome).await
    }

    async fn delete_by_id(&self, id: ResourceId) -> ResourceResult<()> {
        let unit = self.begin().await?;
        let outcome = ResourceDatasource::new(unit.as_repository())
            .delete_by_id(id)
            .await;
        Self::finish(unit, outcome).await
    }
}
