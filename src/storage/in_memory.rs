//! In-memory store for testing and development
//!
//! Rows live in an ordered map keyed by an auto-increment id. A unit of work
//! holds the table lock for its whole lifetime and writes to a staged copy,
//! so writers are serialized and nothing is visible before commit.

use crate::core::error::{StoreError, StoreResult};
use crate::core::repository::{Repository, Store, UnitOfWork};
use crate::core::resource::{Resource, ResourceId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Rows of one resource type plus the id sequence
#[derive(Clone, Debug)]
struct Table<T> {
    rows: BTreeMap<ResourceId, T>,
    next_id: ResourceId,
}

impl<T: Resource> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn find_all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn find_by_id(&self, id: ResourceId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn exists_by_unique_key(&self, key: &str) -> bool {
        self.rows.values().any(|row| row.unique_key() == key)
    }

    /// Insert or replace, enforcing the uniqueness key like a unique index
    fn save(&mut self, mut entity: T) -> StoreResult<T> {
        let conflict = self
            .rows
            .iter()
            .any(|(id, row)| Some(*id) != entity.id() && row.unique_key() == entity.unique_key());
        if conflict {
            return Err(StoreError::UniqueViolation {
                field: T::UNIQUE_FIELD.to_string(),
                value: entity.unique_key().to_string(),
            });
        }

        let id = match entity.id() {
            Some(id) => {
                if !self.rows.contains_key(&id) {
                    return Err(StoreError::backend(format!(
                        "{} row {} does not exist",
                        T::COLLECTION_NAME,
                        id
                    )));
                }
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                entity.set_id(id);
                entity.apply_defaults();
                id
            }
        };

        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    fn delete_by_id(&mut self, id: ResourceId) {
        self.rows.remove(&id);
    }
}

/// In-memory store implementation
///
/// Cloning shares the underlying table.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    reader: InMemoryRepository<T>,
}

impl<T: Resource> InMemoryStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            reader: InMemoryRepository {
                table: Arc::new(AsyncMutex::new(Table::new())),
            },
        }
    }
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> Store<T> for InMemoryStore<T> {
    fn repository(&self) -> &dyn Repository<T> {
        &self.reader
    }

    async fn begin(&self) -> StoreResult<Box<dyn UnitOfWork<T>>> {
        let committed = self.reader.table.clone().lock_owned().await;
        let staged = Mutex::new((*committed).clone());
        Ok(Box::new(InMemoryUnitOfWork { committed, staged }))
    }
}

/// Auto-committing repository over the shared table
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    table: Arc<AsyncMutex<Table<T>>>,
}

#[async_trait]
impl<T: Resource> Repository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.table.lock().await.find_all())
    }

    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<T>> {
        Ok(self.table.lock().await.find_by_id(id))
    }

    async fn save(&self, entity: T) -> StoreResult<T> {
        self.table.lock().await.save(entity)
    }

    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        self.table.lock().await.delete_by_id(id);
        Ok(())
    }

    async fn exists_by_id(&self, id: ResourceId) -> StoreResult<bool> {
        Ok(self.table.lock().await.rows.contains_key(&id))
    }

    async fn exists_by_unique_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.table.lock().await.exists_by_unique_key(key))
    }
}

/// Unit of work holding the table lock and a staged copy of the rows
pub struct InMemoryUnitOfWork<T> {
    committed: OwnedMutexGuard<Table<T>>,
    staged: Mutex<Table<T>>,
}

impl<T: Resource> InMemoryUnitOfWork<T> {
    fn with_staged<R>(&self, f: impl FnOnce(&mut Table<T>) -> StoreResult<R>) -> StoreResult<R> {
        let mut staged = self
            .staged
            .lock()
            .map_err(|e| StoreError::backend(format!("Failed to acquire staged rows: {}", e)))?;
        f(&mut staged)
    }
}

#[async_trait]
impl<T: Resource> Repository<T> for InMemoryUnitOfWork<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        self.with_staged(|table| Ok(table.find_all()))
    }

    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<T>> {
        self.with_staged(|table| Ok(table.find_by_id(id)))
    }

    async fn save(&self, entity: T) -> StoreResult<T> {
        self.with_staged(|table| table.save(entity))
    }

    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        self.with_staged(|table| {
            table.delete_by_id(id);
            Ok(())
        })
    }

    async fn exists_by_id(&self, id: ResourceId) -> StoreResult<bool> {
        self.with_staged(|table| Ok(table.rows.contains_key(&id)))
    }

    async fn exists_by_unique_key(&self, key: &str) -> StoreResult<bool> {
        self.with_staged(|table| Ok(table.exists_by_unique_key(key)))
    }
}

#[async_trait]
impl<T: Resource> UnitOfWork<T> for InMemoryUnitOfWork<T> {
    fn as_repository(&self) -> &dyn Repository<T> {
        self
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        let InMemoryUnitOfWork {
            mut committed,
            staged,
        } = *self;
        *committed = staged
            .into_inner()
            .map_err(|e| StoreError::backend(format!("Failed to acquire staged rows: {}", e)))?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        Ok(())
    }
}
