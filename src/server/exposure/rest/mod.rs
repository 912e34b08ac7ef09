//! REST API exposure
//!
//! Turns the registered resource descriptors into an Axum `Router`,
//! adds health checks and wraps everything in a request tracing layer.

pub mod descriptor;
pub mod handlers;
pub mod mapper;

pub use descriptor::ResourceDescriptor;
pub use mapper::ResourceMapper;

use crate::server::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - CRUD routes of every registered resource
    /// - Custom routes
    pub fn build_router(registry: &EntityRegistry, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(TraceLayer::new_for_http())
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "storefront-api"
        }))
    }
}
