//! HTTP server assembly
//!
//! `ServerBuilder` collects resource services, turns each into a set of
//! CRUD routes and serves them with graceful shutdown.

pub mod builder;
pub mod entity_registry;
pub mod exposure;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use exposure::rest::{ResourceDescriptor, ResourceMapper};
