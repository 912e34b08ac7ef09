//! PostgreSQL storage backend using sqlx
//!
//! Each resource maps onto its own table (see `migrations/`). Uniqueness
//! keys are backed by unique constraints, and a violation surfaces as
//! [`StoreError::UniqueViolation`].
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag.

mod records;

pub use records::{CategoryRecord, OrderRecord};

use crate::core::error::{StoreError, StoreResult};
use crate::core::repository::{Repository, Store, UnitOfWork};
use crate::core::resource::{Resource, ResourceId};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::query_builder::Separated;
use sqlx::{Executor, FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use std::marker::PhantomData;
use std::time::Duration;
use tokio::sync::Mutex;

/// Table mapping for a resource stored in postgres
pub trait PgResource: Resource {
    /// Table name
    const TABLE: &'static str;

    /// Column carrying the uniqueness key
    const UNIQUE_COLUMN: &'static str;

    /// Writable columns, in the order `bind_values` pushes them
    const COLUMNS: &'static [&'static str];

    /// Row type returned by `SELECT *`
    type Record: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;

    /// Push one bind per entry of `COLUMNS`
    fn bind_values(&self, values: &mut Separated<'_, '_, Postgres, &'static str>);
}

/// Open a connection pool and apply pending migrations
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!(max_connections, "connected to PostgreSQL");
    Ok(pool)
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.into())
}

/// Map a write failure, recognising unique constraint violations
fn write_error<T: PgResource>(err: sqlx::Error, entity: &T) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::UniqueViolation {
                field: T::UNIQUE_FIELD.to_string(),
                value: entity.unique_key().to_string(),
            };
        }
    }
    backend(err)
}

// =============================================================================
// Queries, shared by the pool repository and the transaction
// =============================================================================

async fn find_all<'c, T, E>(executor: E) -> StoreResult<Vec<T>>
where
    T: PgResource,
    E: Executor<'c, Database = Postgres>,
{
    let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
    let rows = sqlx::query_as::<_, T::Record>(&sql)
        .fetch_all(executor)
        .await
        .map_err(backend)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

async fn find_by_id<'c, T, E>(executor: E, id: ResourceId) -> StoreResult<Option<T>>
where
    T: PgResource,
    E: Executor<'c, Database = Postgres>,
{
    let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
    let row = sqlx::query_as::<_, T::Record>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(backend)?;
    Ok(row.map(Into::into))
}

async fn save<'c, T, E>(executor: E, mut entity: T) -> StoreResult<T>
where
    T: PgResource,
    E: Executor<'c, Database = Postgres>,
{
    let columns = T::COLUMNS.join(", ");
    let mut builder = match entity.id() {
        None => {
            entity.apply_defaults();
            let mut builder =
                QueryBuilder::<Postgres>::new(format!("INSERT INTO {} ({}) VALUES (", T::TABLE, columns));
            entity.bind_values(&mut builder.separated(", "));
            builder.push(") RETURNING *");
            builder
        }
        Some(id) => {
            let mut builder = QueryBuilder::<Postgres>::new(format!(
                "UPDATE {} SET ({}) = ROW(",
                T::TABLE,
                columns
            ));
            entity.bind_values(&mut builder.separated(", "));
            builder.push(") WHERE id = ");
            builder.push_bind(id);
            builder.push(" RETURNING *");
            builder
        }
    };

    let row = builder
        .build_query_as::<T::Record>()
        .fetch_optional(executor)
        .await
        .map_err(|e| write_error(e, &entity))?;

    match row {
        Some(record) => Ok(record.into()),
        None => Err(StoreError::backend(format!(
            "{} row {} does not exist",
            T::COLLECTION_NAME,
            entity.id().unwrap_or_default()
        ))),
    }
}

async fn delete_by_id<'c, T, E>(executor: E, id: ResourceId) -> StoreResult<()>
where
    T: PgResource,
    E: Executor<'c, Database = Postgres>,
{
    let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
    sqlx::query(&sql)
        .bind(id)
        .execute(executor)
        .await
        .map_err(backend)?;
    Ok(())
}

async fn exists_by_id<'c, T, E>(executor: E, id: ResourceId) -> StoreResult<bool>
where
    T: PgResource,
    E: Executor<'c, Database = Postgres>,
{
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", T::TABLE);
    sqlx::query_scalar::<_, bool>(&sql)
        .bind(id)
        .fetch_one(executor)
        .await
        .map_err(backend)
}

async fn exists_by_unique_key<'c, T, E>(executor: E, key: &str) -> StoreResult<bool>
where
    T: PgResource,
    E: Executor<'c, Database = Postgres>,
{
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
        T::TABLE,
        T::UNIQUE_COLUMN
    );
    sqlx::query_scalar::<_, bool>(&sql)
        .bind(key)
        .fetch_one(executor)
        .await
        .map_err(backend)
}

// =============================================================================
// Store
// =============================================================================

/// Postgres-backed store for one resource type
#[derive(Clone, Debug)]
pub struct PostgresStore<T> {
    reader: PostgresRepository<T>,
}

impl<T: PgResource> PostgresStore<T> {
    /// Create a store over an already migrated pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            reader: PostgresRepository {
                pool,
                _marker: PhantomData,
            },
        }
    }
}

#[async_trait]
impl<T: PgResource> Store<T> for PostgresStore<T> {
    fn repository(&self) -> &dyn Repository<T> {
        &self.reader
    }

    async fn begin(&self) -> StoreResult<Box<dyn UnitOfWork<T>>> {
        let tx = self.reader.pool.begin().await.map_err(backend)?;
        Ok(Box::new(PostgresUnitOfWork {
            tx: Mutex::new(tx),
            _marker: PhantomData,
        }))
    }
}

/// Auto-committing repository over the pool
#[derive(Clone, Debug)]
pub struct PostgresRepository<T> {
    pool: PgPool,
    _marker: PhantomData<T>,
}

#[async_trait]
impl<T: PgResource> Repository<T> for PostgresRepository<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        find_all(&self.pool).await
    }

    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<T>> {
        find_by_id(&self.pool, id).await
    }

    async fn save(&self, entity: T) -> StoreResult<T> {
        save(&self.pool, entity).await
    }

    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        delete_by_id::<T, _>(&self.pool, id).await
    }

    async fn exists_by_id(&self, id: ResourceId) -> StoreResult<bool> {
        exists_by_id::<T, _>(&self.pool, id).await
    }

    async fn exists_by_unique_key(&self, key: &str) -> StoreResult<bool> {
        exists_by_unique_key::<T, _>(&self.pool, key).await
    }
}

/// Unit of work wrapping a database transaction
///
/// Dropping it without `commit` rolls the transaction back.
pub struct PostgresUnitOfWork<T> {
    tx: Mutex<Transaction<'static, Postgres>>,
    _marker: PhantomData<T>,
}

#[async_trait]
impl<T: PgResource> Repository<T> for PostgresUnitOfWork<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        let mut tx = self.tx.lock().await;
        find_all(&mut **tx).await
    }

    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<T>> {
        let mut tx = self.tx.lock().await;
        find_by_id(&mut **tx, id).await
    }

    async fn save(&self, entity: T) -> StoreResult<T> {
        let mut tx = self.tx.lock().await;
        save(&mut **tx, entity).await
    }

    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        let mut tx = self.tx.lock().await;
        delete_by_id::<T, _>(&mut **tx, id).await
    }

    async fn exists_by_id(&self, id: ResourceId) -> StoreResult<bool> {
        let mut tx = self.tx.lock().await;
        exists_by_id::<T, _>(&mut **tx, id).await
    }

    async fn exists_by_unique_key(&self, key: &str) -> StoreResult<bool> {
        let mut tx = self.tx.lock().await;
        exists_by_unique_key::<T, _>(&mut **tx, key).await
    }
}

#[async_trait]
impl<T: PgResource> UnitOfWork<T> for PostgresUnitOfWork<T> {
    fn as_repository(&self) -> &dyn Repository<T> {
        self
    }

    async fn commit(self: Box<Self>) -> StoreResult<()> {
        self.tx.into_inner().commit().await.map_err(backend)
    }

    async fn rollback(self: Box<Self>) -> StoreResult<()> {
        self.tx.into_inner().rollback().await.map_err(backend)
    }
}
