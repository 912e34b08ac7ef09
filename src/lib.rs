//! # Storefront API
//!
//! REST service managing product categories and customer orders.
//!
//! ## Layers
//!
//! - **Resources** ([`core::resource`]): domain values implement
//!   [`Resource`](core::Resource) to declare their name, uniqueness key and
//!   which fields an update may change.
//! - **Datasource** ([`core::datasource`]): enforces uniqueness and existence
//!   rules and normalizes every failure into a [`ResourceError`](core::ResourceError)
//!   of kind `NOT_FOUND`, `VALIDATION_ERROR` or `DATABASE_ERROR`.
//! - **Service** ([`core::service`]): runs each write in one unit of work.
//! - **Storage** ([`storage`]): in-memory tables, or PostgreSQL with the
//!   `postgres` feature.
//! - **Server** ([`server`]): `/api/categories` and `/api/orders` CRUD routes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront::prelude::*;
//!
//! let service = StoreService::new(InMemoryStore::<Category>::new());
//! let saved = service.save(Category::new("Electronics", "Devices")).await?;
//! assert!(saved.id.is_some());
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, ErrorKind, ErrorResponse, Repository, Resource, ResourceError,
        ResourceId, ResourceResult, ResourceService, Store, StoreError, StoreResult,
        StoreService, UnitOfWork, ValidatedJson,
    };

    // === Entities ===
    pub use crate::entities::{
        Category, CategoryRequest, CategoryResponse, Order, OrderRequest, OrderResponse,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PgResource, PostgresStore};

    // === Config ===
    pub use crate::config::{AppConfig, LoggingConfig, ServerConfig, StorageConfig};

    // === Server ===
    pub use crate::app::Services;
    pub use crate::server::{
        EntityDescriptor, EntityRegistry, ResourceDescriptor, ResourceMapper, ServerBuilder,
    };

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
