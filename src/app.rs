//! Application bootstrap: wires the configured store into the REST server

use crate::config::{AppConfig, StorageConfig};
use crate::core::service::{ResourceService, StoreService};
use crate::entities::{Category, Order};
use crate::server::ServerBuilder;
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;

/// Services of every exposed resource
pub struct Services {
    pub categories: Arc<dyn ResourceService<Category>>,
    pub orders: Arc<dyn ResourceService<Order>>,
}

impl Services {
    /// Services over fresh in-memory stores
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(StoreService::new(InMemoryStore::<Category>::new())),
            orders: Arc::new(StoreService::new(InMemoryStore::<Order>::new())),
        }
    }

    /// Services over postgres tables sharing one pool
    #[cfg(feature = "postgres")]
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        use crate::storage::PostgresStore;

        Self {
            categories: Arc::new(StoreService::new(PostgresStore::<Category>::new(pool.clone()))),
            orders: Arc::new(StoreService::new(PostgresStore::<Order>::new(pool))),
        }
    }

    /// Connect the backend selected by `storage`
    pub async fn connect(storage: &StorageConfig) -> Result<Self> {
        match storage {
            StorageConfig::InMemory => {
                tracing::info!("using in-memory storage");
                Ok(Self::in_memory())
            }
            #[cfg(feature = "postgres")]
            StorageConfig::Postgres {
                url,
                max_connections,
            } => {
                let pool = crate::storage::postgres::connect(url, *max_connections).await?;
                Ok(Self::postgres(pool))
            }
            #[cfg(not(feature = "postgres"))]
            StorageConfig::Postgres { .. } => {
                anyhow::bail!("postgres storage requires the `postgres` feature")
            }
        }
    }

    /// Server builder exposing every service
    pub fn into_server(self) -> ServerBuilder {
        ServerBuilder::new()
            .register_resource::<Category>(self.categories)
            .register_resource::<Order>(self.orders)
    }
}

/// Build the full router for `config`
pub async fn build_router(config: &AppConfig) -> Result<Router> {
    Services::connect(&config.storage).await?.into_server().build()
}

/// Connect storage and serve until shutdown
pub async fn run(config: AppConfig) -> Result<()> {
    Services::connect(&config.storage)
        .await?
        .into_server()
        .serve(&config.server.addr())
        .await
}
