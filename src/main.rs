//! HTTP Server Bootstrap
//!
//! A minimal production-shaped HTTP server built with Tokio and Axum: it
//! loads configuration, assembles an (optional) middleware chain, binds a
//! TCP port, announces itself, and serves until the process ends.
//!
//! # Startup Flow
//!
//! ```text
//! process start
//!     → .env hydration (config::hydrate_env)
//!     → load + validate config (config::load_default)
//!     → init tracing (observability::logging)
//!     → construct server (http::HttpServer, middleware per config)
//!     → bind listener (net::Listener)
//!     → print banner (lifecycle::startup)
//!     → serve; every request 404s until routes exist
//! ```
//!
//! Startup failures (unparseable config, port already bound) propagate out
//! of `main` and terminate the process with a non-zero status.

use server_bootstrap::config;
use server_bootstrap::http::HttpServer;
use server_bootstrap::lifecycle::{startup, Shutdown};
use server_bootstrap::net::Listener;
use server_bootstrap::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::hydrate_env()?;
    let config = config::load_default()?;
    logging::init(&config.logging);

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        cors = config.middleware.cors,
        security_headers = config.middleware.security_headers,
        request_logging = config.middleware.request_logging,
        "Configuration loaded"
    );

    let listener = Listener::bind(&config.listener).await?;
    let addr = listener.local_addr()?;

    for line in startup::banner(addr) {
        println!("{}", line);
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config);
    server.run(listener.into_inner(), shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
