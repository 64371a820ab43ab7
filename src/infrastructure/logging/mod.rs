//! Logging infrastructure
//!
//! Tracing subscriber bootstrap driven by the `logger` section of the
//! assembled configuration.

pub mod logger;

pub use logger::Logger;
