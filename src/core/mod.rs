//! Core module containing the resource abstraction and its generic services

pub mod datasource;
pub mod error;
pub mod repository;
pub mod resource;
pub mod service;
pub mod validation;

pub use datasource::ResourceDatasource;
pub use error::{
    ApiError, ApiResult, ErrorKind, ErrorResponse, ResourceError, ResourceResult, StoreError,
    StoreResult,
};
pub use repository::{Repository, Store, UnitOfWork};
pub use resource::{Resource, ResourceId};
pub use service::{ResourceService, StoreService};
pub use validation::ValidatedJson;
