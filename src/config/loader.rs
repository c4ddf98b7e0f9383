//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{self, validate_config, ValidationError};

/// Environment variable overriding the listener port.
pub const PORT_VAR: &str = "PORT";

/// Config file the binary consults when present.
pub const DEFAULT_CONFIG_PATH: &str = "bootstrap.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("environment variable `{key}` has invalid value `{value}`")]
    InvalidEnv { key: &'static str, value: String },

    #[error("validation failed: {}", validation::describe(.0))]
    Validation(Vec<ValidationError>),
}

/// Load `.env` into the process environment.
///
/// A missing file is fine; an unreadable or malformed one is an error.
pub fn hydrate_env() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(ref err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ConfigError::Dotenv(err)),
    }
}

/// Load and validate configuration from a TOML file, applying environment
/// overrides on top.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;
    finish(config)
}

/// Load configuration for the binary: `bootstrap.toml` when present,
/// built-in defaults otherwise, plus environment overrides.
pub fn load_default() -> Result<ServerConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_config(path)
    } else {
        finish(ServerConfig::default())
    }
}

fn finish(mut config: ServerConfig) -> Result<ServerConfig, ConfigError> {
    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides. `PORT` follows the usual dotenv convention.
fn apply_env_overrides(config: &mut ServerConfig) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(PORT_VAR) {
        config.listener.port = value.parse().map_err(|_| ConfigError::InvalidEnv {
            key: PORT_VAR,
            value: value.clone(),
        })?;
    }
    Ok(())
}
