//! Configuration assembly infrastructure
//!
//! Environment-driven configuration in three parts:
//! - Complete built-in defaults for the fixed tree
//! - Per-key environment overrides (dotted key -> `UPPER_SNAKE` name)
//! - Sentinel-scanned indexed collections (`PREFIX_0`, `PREFIX_1`, ...)
//!
//! Assembly is fail-fast and side-effect free beyond environment
//! reads; the resulting [`Config`](crate::domain::models::config::Config)
//! is immutable for the life of the process.

pub mod defaults;
pub mod env;
pub mod indexed;
pub mod loader;

pub use env::{env_key, EnvSource, ProcessEnv};
pub use loader::{ConfigError, ConfigLoader};
