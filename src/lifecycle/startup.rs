//! Startup diagnostics.
//!
//! # Responsibilities
//! - Compose the human-readable banner for a freshly bound listener
//! - Derive the advertised URLs from the actual bound address
//!
//! # Design Decisions
//! - The network address is discovered at runtime, never configured: a
//!   wrong-but-plausible hardcoded address is worse than no line at all
//! - Lines are returned as data so the caller decides where they go
//!   (the binary prints them to stdout)

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

/// Compose the startup banner for a listener bound at `addr`.
///
/// The first line always names the port. URL lines depend on where the
/// listener is reachable: a wildcard bind advertises loopback plus the
/// discovered network address, a loopback bind advertises loopback only,
/// and a concrete bind advertises exactly that address.
pub fn banner(addr: SocketAddr) -> Vec<String> {
    let port = addr.port();
    let mut lines = vec![format!("server started on port {}", port)];

    let ip = addr.ip();
    if ip.is_unspecified() {
        lines.push(format!("local: http://localhost:{}", port));
        if let Some(lan) = lan_ip() {
            lines.push(format!("network: http://{}:{}", url_host(lan), port));
        }
    } else if ip.is_loopback() {
        lines.push(format!("local: http://localhost:{}", port));
    } else {
        lines.push(format!("network: http://{}:{}", url_host(ip), port));
    }

    lines
}

/// Best-effort discovery of the host's routable address.
///
/// Connecting a UDP socket performs route selection without sending any
/// packets; the source address the OS picks is the one LAN peers would use.
/// Returns `None` when the host has no route (offline, loopback-only).
pub fn lan_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(("8.8.8.8", 80)).ok()?;
    let ip = socket.local_addr().ok()?.ip();

    if ip.is_loopback() || ip.is_unspecified() {
        None
    } else {
        Some(ip)
    }
}

/// Format an IP for use inside a URL (IPv6 needs brackets).
fn url_host(ip: IpAddr) -> String {
    match ip {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => format!("[{}]", v6),
    }
}
