//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host + port)
//!     → listener.rs (resolve, bind)
//!     → bound TcpListener
//!     → Hand off to HTTP layer
//!
//! Listener states: unbound → bound (no transition back)
//! ```

pub mod listener;

pub use listener::{Listener, ListenerError};
