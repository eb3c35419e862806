//! API server lifecycle: build the app, bind, serve until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use staffbook_storage::EmployeeStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{AppState, router};
use crate::{Result, middleware};

/// Staffbook API server.
///
/// Owns the configuration and the store handle; the store is opened by the
/// caller so tests can hand in a [`staffbook_storage::MemoryStore`].
pub struct Server {
    config: ServerConfig,
    store: Arc<dyn EmployeeStore>,
}

impl Server {
    /// Create a server over an already opened store.
    pub fn new(config: ServerConfig, store: Arc<dyn EmployeeStore>) -> Self {
        Self { config, store }
    }

    /// The server's configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Complete application: routes plus middleware.
    pub fn router(&self) -> Router {
        let routes = router(
            AppState::new(Arc::clone(&self.store)),
            &self.config.normalized_base_path(),
        );
        middleware::apply(routes)
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener> {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        Ok(listener)
    }

    /// Serve on `listener` until `shutdown` resolves, then drain in-flight
    /// requests.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!(
            %addr,
            backend = self.store.backend_name(),
            base_path = %self.config.normalized_base_path(),
            "Staffbook API listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Staffbook API stopped");
        Ok(())
    }

    /// Serve on `listener` until Ctrl-C or SIGTERM.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
