//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → compose banner from the bound address → print
//!
//! Shutdown (shutdown.rs):
//!     Owner triggers → serve loop drains → port released
//! ```
//!
//! # Design Decisions
//! - The banner is derived from the listener's actual address, so it is
//!   correct even for ephemeral ports
//! - Teardown is owner-driven, not signal-driven; each owner (binary or
//!   test) constructs, binds, and tears down its own server

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
