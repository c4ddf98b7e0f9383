//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum router and wire up the configured middleware
//! - Serve requests on a bound listener
//! - Drain gracefully when the shutdown signal fires
//!
//! No routes are registered: with nothing mounted, every request falls
//! through to the framework's 404. The middleware layers wrap that default
//! fallback like any other response.

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use axum::Router;

use crate::config::ServerConfig;
use crate::http::middleware;

/// Build the application router from a configuration.
///
/// Separated from [`HttpServer`] so tests can drive the router directly
/// without a live listener.
pub fn build_router(config: &ServerConfig) -> Router {
    middleware::apply(Router::new(), &config.middleware)
}

/// The HTTP server: an owned application object, constructed from config
/// and consumed by [`run`](HttpServer::run).
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            router: build_router(config),
        }
    }

    /// Run the server on the given listener until shutdown is triggered.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
