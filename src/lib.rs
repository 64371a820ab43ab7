//! Gateway API configuration core
//!
//! Assembles the process configuration from built-in defaults and
//! environment variables, including two variable-length collections
//! discovered by probing sequential keys (`KINESIS_STREAM_0`,
//! `KINESIS_STREAM_1`, ... and `MQTT_CLIENT_0`, `MQTT_CLIENT_1`, ...
//! plus the fixed `MQTT_CLIENT_GTW` alias).
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the typed, immutable configuration
//!   tree and its sub-records
//! - **Infrastructure Layer** (`infrastructure`): environment access,
//!   defaults, the assembler, and the logging bootstrap
//!
//! # Example
//!
//! ```no_run
//! use gateway_api::infrastructure::config::{ConfigLoader, ProcessEnv};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load(&ProcessEnv)?;
//!     println!("listening on :{}", config.server.port);
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, CorsConfig, EnvConfig, JwksConfig, KinesisStreamConfig, LogEncoding, LoggerConfig,
    MqttClientConfig, PostgresConfig, RedisConfig, ServerConfig, SqsConfig,
};
pub use infrastructure::config::{ConfigError, ConfigLoader, EnvSource, ProcessEnv};
pub use infrastructure::logging::Logger;
