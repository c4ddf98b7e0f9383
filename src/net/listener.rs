//! TCP listener bind and handoff.
//!
//! # Responsibilities
//! - Resolve the configured host and port into a socket address
//! - Bind the listener, surfacing bind failures as typed errors
//! - Hand the bound socket to the HTTP layer
//!
//! # Design Decisions
//! - Binding is the only fallible startup step with an OS failure mode
//!   (port in use, permission denied on low ports); it gets its own error
//!   so the binary can report it and exit non-zero
//! - Accepting connections is left entirely to the HTTP layer

use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// Failed to bind to the configured address.
    Bind(std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Bind(e) => write!(f, "Failed to bind: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// A bound TCP listener, ready to hand off to the HTTP server.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let host: IpAddr = config.host.parse().map_err(|e| {
            ListenerError::Bind(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })?;
        let addr = SocketAddr::new(host, config.port);

        let listener = TcpListener::bind(addr).await.map_err(ListenerError::Bind)?;

        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(
            address = %local_addr,
            "Listener bound"
        );

        Ok(Self { inner: listener })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }

    /// Surrender the underlying socket for serving.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}
