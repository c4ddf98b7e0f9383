//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (host parses, port non-zero, known log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs when a config is loaded from a file or the environment; configs
//!   constructed directly in code (tests binding ephemeral ports) skip it

use std::net::IpAddr;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Host is not a parseable IP address.
    InvalidHost(String),
    /// Port 0 asks the OS for an ephemeral port, which is never what a
    /// config file means.
    ZeroPort,
    /// Log level is not one of trace/debug/info/warn/error.
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidHost(host) => {
                write!(f, "listener.host `{}` is not a valid IP address", host)
            }
            ValidationError::ZeroPort => write!(f, "listener.port must be non-zero"),
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "logging.level `{}` is not a known log level", level)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a loaded configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(config.listener.host.clone()));
    }

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !KNOWN_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Render a list of validation errors into a single message.
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
