//! Integration tests for server startup and teardown.

mod common;

use std::io::Read;
use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use common::{loopback_config, spawn_server, wait_connectable};
use server_bootstrap::net::Listener;

#[tokio::test]
async fn server_accepts_connections_within_deadline() {
    let server = spawn_server(loopback_config()).await;

    assert!(
        wait_connectable(server.addr, Duration::from_secs(2)).await,
        "server never became connectable on {}",
        server.addr
    );

    server.teardown().await;
}

#[tokio::test]
async fn teardown_releases_the_port_for_reuse() {
    let first = spawn_server(loopback_config()).await;
    let addr = first.addr;
    assert!(wait_connectable(addr, Duration::from_secs(2)).await);
    first.teardown().await;

    let mut config = loopback_config();
    config.listener.port = addr.port();
    let second = spawn_server(config).await;
    assert_eq!(second.addr, addr);
    assert!(
        wait_connectable(second.addr, Duration::from_secs(2)).await,
        "second start never became connectable on {}",
        second.addr
    );
    second.teardown().await;
}

#[tokio::test]
async fn binding_a_taken_port_fails_with_addr_in_use() {
    let server = spawn_server(loopback_config()).await;

    let mut config = loopback_config();
    config.listener.port = server.addr.port();
    let err = match Listener::bind(&config.listener).await {
        Ok(_) => panic!("second bind on a taken port succeeded"),
        Err(err) => err,
    };
    let server_bootstrap::net::ListenerError::Bind(io_err) = err;
    assert_eq!(io_err.kind(), std::io::ErrorKind::AddrInUse);

    server.teardown().await;
}

#[test]
fn binary_exits_nonzero_when_the_port_is_taken() {
    let holder = TcpListener::bind("127.0.0.1:0").expect("holder bind failed");
    let port = holder.local_addr().expect("holder has no local addr").port();

    // Scratch working directory so no stray config or .env is picked up.
    let dir = tempfile::tempdir().expect("tempdir failed");
    std::fs::write(
        dir.path().join("bootstrap.toml"),
        "[listener]\nhost = \"127.0.0.1\"\n",
    )
    .expect("config write failed");

    let mut child = Command::new(env!("CARGO_BIN_EXE_server-bootstrap"))
        .current_dir(dir.path())
        .env("PORT", port.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary failed to spawn");

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        match child.try_wait().expect("wait on child failed") {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                panic!("binary kept running on a port that was already taken");
            }
            None => std::thread::sleep(Duration::from_millis(50)),
        }
    };

    let mut stderr = String::new();
    if let Some(mut pipe) = child.stderr.take() {
        let _ = pipe.read_to_string(&mut stderr);
    }
    assert!(!status.success(), "exit was clean, stderr: {stderr}");
    assert!(stderr.contains("AddrInUse"), "stderr: {stderr}");
}

#[tokio::test]
async fn serve_task_finishes_after_trigger() {
    let server = spawn_server(loopback_config()).await;
    assert!(wait_connectable(server.addr, Duration::from_secs(2)).await);

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(2), server.handle)
        .await
        .expect("serve task did not stop after shutdown");
    assert!(result.expect("serve task panicked").is_ok());
}
