//! Persistence ports: repositories, stores and units of work

use crate::core::error::StoreResult;
use crate::core::resource::{Resource, ResourceId};
use async_trait::async_trait;

/// Thin persistence port for one resource type
///
/// Implementations only move data; invariants are enforced by the
/// datasource sitting on top of them.
#[async_trait]
pub trait Repository<T: Resource>: Send + Sync {
    /// List every row, ordered by ascending id
    async fn find_all(&self) -> StoreResult<Vec<T>>;

    /// Get a row by id
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<T>>;

    /// Insert when the id is unset, replace the existing row otherwise
    async fn save(&self, entity: T) -> StoreResult<T>;

    /// Remove a row by id (no-op when absent)
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()>;

    /// Check whether a row with this id exists
    async fn exists_by_id(&self, id: ResourceId) -> StoreResult<bool>;

    /// Check whether any row already uses this uniqueness key
    async fn exists_by_unique_key(&self, key: &str) -> StoreResult<bool>;
}

/// An atomic unit of work against the store
///
/// Writes made through the unit are invisible to other readers until
/// `commit`. Dropping a unit without committing discards its writes.
#[async_trait]
pub trait UnitOfWork<T: Resource>: Repository<T> {
    /// View this unit as a plain repository
    fn as_repository(&self) -> &dyn Repository<T>;

    /// Make every write of this unit visible
    async fn commit(self: Box<Self>) -> StoreResult<()>;

    /// Discard every write of this unit
    async fn rollback(self: Box<Self>) -> StoreResult<()>;
}

/// Entry point to the persisted rows of one resource type
#[async_trait]
pub trait Store<T: Resource>: Send + Sync {
    /// Repository for reads outside of any unit of work
    fn repository(&self) -> &dyn Repository<T>;

    /// Begin a new unit of work
    async fn begin(&self) -> StoreResult<Box<dyn UnitOfWork<T>>>;
}
