//! Binds the router to a socket.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::{build_router, SharedStore};
use crate::store::ItemStore;

/// Item CRUD server.
pub struct ItemServer {
    config: ServerConfig,
    store: SharedStore,
}

impl ItemServer {
    /// Load the data file named in `config` and get ready to serve it.
    pub fn new(config: ServerConfig) -> Self {
        let store = ItemStore::builder(&config.data_file)
            .pretty(config.pretty)
            .build();
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Settings this server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The store behind the routes.
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.store))
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> std::io::Result<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            data_file = %self.config.data_file.display(),
            "item store listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
