//! Observability subsystem.
//!
//! All subsystems log structured events through `tracing`; this module owns
//! subscriber setup. Request-level logging is a middleware concern and
//! lives with the other middleware in the HTTP layer.

pub mod logging;
