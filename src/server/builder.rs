//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::exposure::rest::{ResourceDescriptor, ResourceMapper};
use crate::core::service::ResourceService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .register_resource::<Category>(Arc::new(StoreService::new(InMemoryStore::<Category>::new())))
///     .register_resource::<Order>(Arc::new(StoreService::new(InMemoryStore::<Order>::new())))
///     .build()?;
/// ```
pub struct ServerBuilder {
    entity_registry: EntityRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            entity_registry: EntityRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Expose a resource under `/api/{collection}` backed by `service`
    pub fn register_resource<T: ResourceMapper>(
        mut self,
        service: Arc<dyn ResourceService<T>>,
    ) -> Self {
        self.entity_registry
            .register(Box::new(ResourceDescriptor::<T>::new(service)));
        self
    }

    /// Add routes that don't fit the CRUD pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    ///
    /// Fails when no resource has been registered.
    pub fn build(self) -> Result<Router> {
        if self.entity_registry.is_empty() {
            anyhow::bail!("No resource registered. Call .register_resource()");
        }

        tracing::debug!(
            entities = ?self.entity_registry.entity_types(),
            "building REST router"
        );
        Ok(RestExposure::build_router(
            &self.entity_registry,
            self.custom_routes,
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and stops on SIGTERM or Ctrl+C once in-flight
    /// requests have completed.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for SIGTERM or Ctrl+C
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
