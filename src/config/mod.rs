//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file
//!     → loader.rs hydrate_env (process environment)
//!
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (PORT)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it is read exactly once at startup
//! - All fields have defaults, so a missing file and an empty file both
//!   yield a runnable configuration
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{hydrate_env, load_config, load_default, ConfigError};
pub use schema::ListenerConfig;
pub use schema::LoggingConfig;
pub use schema::MiddlewareConfig;
pub use schema::ServerConfig;
