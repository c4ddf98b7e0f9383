//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, accept/serve loop)
//!     → middleware.rs (optional CORS, security headers, request logging)
//!     → [no routes registered]
//!     → framework 404
//! ```

pub mod middleware;
pub mod server;

pub use server::{build_router, HttpServer};
