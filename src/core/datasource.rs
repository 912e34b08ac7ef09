//! Generic validation and error-normalization layer over a repository
//!
//! Every failure leaving this module is a [`ResourceError`]: `NotFound`
//! and `Validation` are produced here and propagate untouched, anything
//! the store reports is re-wrapped as `Database` with the cause appended.

use crate::core::error::{ResourceError, ResourceResult, StoreError};
use crate::core::repository::Repository;
use crate::core::resource::{Resource, ResourceId};
use std::marker::PhantomData;

/// Store operation being attempted, used to phrase database errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    FindAll,
    FindById,
    Save,
    Update,
    Delete,
}

impl Operation {
    fn describe<T: Resource>(self) -> String {
        let singular = T::ENTITY_NAME.to_lowercase();
        match self {
            Operation::FindAll => format!("Error fetching {}", T::COLLECTION_NAME),
            Operation::FindById => format!("Error fetching {} by ID", singular),
            Operation::Save => format!("Error saving {}", singular),
            Operation::Update => format!("Error updating {}", singular),
            Operation::Delete => format!("Error deleting {}", singular),
        }
    }
}

/// Translate a store fault into the closed error taxonomy
fn store_failure<T: Resource>(operation: Operation, err: StoreError) -> ResourceError {
    match err {
        // The store rejected the race loser of a concurrent check-then-write
        StoreError::UniqueViolation { value, .. } => {
            ResourceError::validation(T::duplicate_message(&value))
        }
        StoreError::Backend(cause) => {
            let message = format!("{}: {}", operation.describe::<T>(), cause);
            tracing::error!(entity = T::ENTITY_NAME, error = %message, "store failure");
            ResourceError::database(message)
        }
    }
}

/// Enforces existence and uniqueness invariants for one resource type
///
/// Borrows the repository it runs against, so the same logic serves plain
/// reads and writes scoped to a unit of work. Holds no state of its own.
pub struct ResourceDatasource<'r, T: Resource> {
    repository: &'r dyn Repository<T>,
    _marker: PhantomData<T>,
}

impl<'r, T: Resource> ResourceDatasource<'r, T> {
    pub fn new(repository: &'r dyn Repository<T>) -> Self {
        Self {
            repository,
            _marker: PhantomData,
        }
    }

    /// Full current set in store order
    pub async fn find_all(&self) -> ResourceResult<Vec<T>> {
        self.repository
            .find_all()
            .await
            .map_err(|e| store_failure::<T>(Operation::FindAll, e))
    }

    /// Entity with this id, or `NotFound`
    pub async fn find_by_id(&self, id: ResourceId) -> ResourceResult<T> {
        self.load(id, Operation::FindById).await
    }

    /// Persist a new entity whose uniqueness key is not yet taken
    pub async fn save(&self, candidate: T) -> ResourceResult<T> {
        let key = candidate.unique_key().to_string();
        if self.key_taken(&key, Operation::Save).await? {
            tracing::warn!(entity = T::ENTITY_NAME, key = %key, "duplicate key on save");
            return Err(ResourceError::validation(T::duplicate_message(&key)));
        }

        let saved = self
            .repository
            .save(candidate)
            .await
            .map_err(|e| store_failure::<T>(Operation::Save, e))?;

        tracing::debug!(entity = T::ENTITY_NAME, id = ?saved.id(), "saved");
        Ok(saved)
    }

    /// Replace the mutable fields of an existing entity
    ///
    /// The uniqueness check only runs when the candidate changes the key,
    /// so re-submitting the current key alongside other edits succeeds.
    pub async fn update(&self, candidate: T, id: ResourceId) -> ResourceResult<T> {
        let mut existing = self.load(id, Operation::Update).await?;

        if existing.unique_key() != candidate.unique_key() {
            let key = candidate.unique_key().to_string();
            if self.key_taken(&key, Operation::Update).await? {
                tracing::warn!(entity = T::ENTITY_NAME, id, key = %key, "duplicate key on update");
                return Err(ResourceError::validation(T::duplicate_message(&key)));
            }
        }

        existing.apply_update(candidate);

        let updated = self
            .repository
            .save(existing)
            .await
            .map_err(|e| store_failure::<T>(Operation::Update, e))?;

        tracing::debug!(entity = T::ENTITY_NAME, id, "updated");
        Ok(updated)
    }

    /// Remove an existing entity
    pub async fn delete_by_id(&self, id: ResourceId) -> ResourceResult<()> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(|e| store_failure::<T>(Operation::Delete, e))?;

        if !exists {
            return Err(ResourceError::not_found(T::not_found_message(id)));
        }

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|e| store_failure::<T>(Operation::Delete, e))?;

        tracing::debug!(entity = T::ENTITY_NAME, id, "deleted");
        Ok(())
    }

    async fn load(&self, id: ResourceId, operation: Operation) -> ResourceResult<T> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| store_failure::<T>(operation, e))?
            .ok_or_else(|| ResourceError::not_found(T::not_found_message(id)))
    }

    async fn key_taken(&self, key: &str, operation: Operation) -> ResourceResult<bool> {
        self.repository
            .exists_by_unique_key(key)
            .await
            .map_err(|e| store_failure::<T>(operation, e))
    }
}
