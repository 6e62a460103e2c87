//! Mock API server
//!
//! Serves the customers/orders mock on `bind` from the YAML file named by
//! `MOCK_API_CONFIG` (defaults when unset). Log levels come from `RUST_LOG`.

use anyhow::Result;
use mockapi::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("MOCK_API_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            ServerConfig::from_yaml_file(&path)?
        }
        Err(_) => ServerConfig::default(),
    };

    tracing::info!(
        api_base = ?config.backend.api_base,
        delay_ms = config.backend.delay,
        "Starting mock API"
    );

    ServerBuilder::new()
        .with_config(config.backend)
        .with_db_service(MockDataStore::new())
        .serve(&config.bind)
        .await
}
