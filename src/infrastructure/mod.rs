//! Infrastructure layer module
//!
//! External-facing adapters:
//! - Configuration assembly from the process environment
//! - Logging bootstrap (tracing subscriber)

pub mod config;
pub mod logging;
