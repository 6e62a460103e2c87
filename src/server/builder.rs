//! ServerBuilder for fluent API to build the mock HTTP server

use super::backend::InMemoryBackend;
use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::BackendConfig;
use crate::core::service::InMemoryDbService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the mock HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_db_service(MockDataStore::new())
///     .with_config(BackendConfig { api_base: Some("api/".into()), ..Default::default() })
///     .build()?;
/// ```
pub struct ServerBuilder {
    db_service: Option<Box<dyn InMemoryDbService>>,
    config: BackendConfig,
    passthru: Option<Router>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            db_service: None,
            config: BackendConfig::default(),
            passthru: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the data service (required)
    pub fn with_db_service(mut self, service: impl InMemoryDbService + 'static) -> Self {
        self.db_service = Some(Box::new(service));
        self
    }

    /// Set the backend configuration
    pub fn with_config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self
    }

    /// Router that receives requests the mock passes through
    ///
    /// Requests reach it while the data service is inactive, or for unknown
    /// collections when `passthru_unknown_url` is set.
    pub fn with_passthru(mut self, router: Router) -> Self {
        self.passthru = Some(router);
        self
    }

    /// Add custom routes to the server
    ///
    /// Custom routes take precedence over the mock for the paths they match.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let service = self.db_service.take().ok_or_else(|| {
            anyhow::anyhow!("A data service is required. Call .with_db_service()")
        })?;

        let backend = InMemoryBackend::from_boxed(self.config, service);
        Ok(ServerHost::new(backend, self.passthru))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Mock API listening on {}", addr);

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

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
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
