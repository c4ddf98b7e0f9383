//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Honor `RUST_LOG` when set, falling back to the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - The configured level scopes this crate and the HTTP middleware; other
//!   crates stay quiet unless `RUST_LOG` says otherwise
//! - Called once at process start; tests never install a global subscriber

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
pub fn init(config: &LoggingConfig) {
    let default_directives = format!(
        "server_bootstrap={level},tower_http={level}",
        level = config.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}
