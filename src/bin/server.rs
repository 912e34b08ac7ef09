//! Storefront API server
//!
//! Reads configuration from the YAML file named by `STOREFRONT_CONFIG`
//! (defaults otherwise) and serves until SIGTERM or Ctrl+C.

use anyhow::Result;
use storefront::app;
use storefront::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(addr = %config.server.addr(), "starting storefront-api");
    app::run(config).await
}
