//! Shared utilities for integration testing.
//!
//! Every test owns its server: construct a config, bind, run in a
//! background task, tear down when done. Nothing here is global.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use server_bootstrap::config::ServerConfig;
use server_bootstrap::http::HttpServer;
use server_bootstrap::lifecycle::Shutdown;
use server_bootstrap::net::Listener;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// A server running in the background for one test case.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// Trigger shutdown and wait for the serve loop to finish.
    pub async fn teardown(self) {
        self.shutdown.trigger();
        let _ = self.handle.await;
    }
}

/// Config bound to loopback on an ephemeral port, middleware defaults.
pub fn loopback_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;
    config
}

/// Bind and spawn a server for the given config.
pub async fn spawn_server(config: ServerConfig) -> TestServer {
    let listener = Listener::bind(&config.listener).await.expect("bind failed");
    let addr = listener.local_addr().expect("listener has no local addr");

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(&config);

    let handle = tokio::spawn(async move { server.run(listener.into_inner(), rx).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Poll until the address accepts TCP connections or the deadline passes.
pub async fn wait_connectable(addr: SocketAddr, deadline: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
