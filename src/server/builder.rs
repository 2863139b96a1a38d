//! ServerBuilder for fluent API to build HTTP servers

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use super::entity_registry::EntityRegistry;
use super::rest::RestExposure;
use super::state::AppState;
use crate::core::{CompanyService, InvoiceService};
use crate::entities::{CompanyDescriptor, InvoiceDescriptor};

/// Builder for the biztime HTTP server
///
/// Company and invoice routes are registered up front; the only required
/// input is a store.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    state: Option<AppState>,
    entity_registry: EntityRegistry,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the company and invoice entities
    pub fn new() -> Self {
        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(CompanyDescriptor));
        entity_registry.register(Box::new(InvoiceDescriptor));

        Self {
            state: None,
            entity_registry,
        }
    }

    /// Use a backend implementing both store traits
    pub fn with_store<S>(self, store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        self.with_state(AppState::new(store))
    }

    /// Use prebuilt state (e.g., separately injected stores)
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let state = self
            .state
            .ok_or_else(|| anyhow::anyhow!("A store is required. Call .with_store()"))?;

        tracing::debug!(entities = ?self.entity_registry.entity_kinds(), "building router");
        Ok(RestExposure::build_router(&self.entity_registry, &state))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
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

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
