use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fully assembled gateway configuration.
///
/// Built once at startup by `ConfigLoader::load` and never mutated
/// afterwards; consumers receive it by shared reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Postgres connection settings
    pub postgres: PostgresConfig,

    /// Redis connection settings
    pub redis: RedisConfig,

    /// CORS policy settings
    pub cors: CorsConfig,

    /// Logging settings
    pub logger: LoggerConfig,

    /// Deployment environment settings
    pub env: EnvConfig,

    /// SQS queue settings
    pub sqs: SqsConfig,

    /// JWKS endpoint settings
    pub jwks: JwksConfig,

    /// Kinesis streams discovered from `KINESIS_STREAM_{i}` variables
    #[serde(default)]
    pub kinesis: Vec<KinesisStreamConfig>,

    /// MQTT clients discovered from `MQTT_CLIENT_{i}` variables and
    /// the fixed alias keys
    #[serde(default)]
    pub mqtt: Vec<MqttClientConfig>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Listen port, kept as a string for bind-address formatting
    pub port: String,

    /// Run mode: debug, release, test
    pub runmode: String,

    /// Public domain the API is served under
    pub domain: String,
}

/// Postgres configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PostgresConfig {
    /// Database host
    pub host: String,

    /// Database port
    pub port: String,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Database name
    pub dbname: String,

    /// SSL mode passed through to the driver
    pub sslmode: String,

    /// Maximum idle connections in the pool
    pub max_idle_conns: u32,

    /// Maximum open connections in the pool
    pub max_open_conns: u32,

    /// Maximum connection lifetime
    pub conn_max_lifetime: Duration,
}

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RedisConfig {
    /// Redis host
    pub host: String,

    /// Redis port
    pub port: String,

    /// Redis password
    pub password: String,

    /// Logical database index, kept as a string per the client API
    pub db: String,

    /// Dial timeout
    pub dial_timeout: Duration,

    /// Read timeout
    pub read_timeout: Duration,

    /// Write timeout
    pub write_timeout: Duration,

    /// Idle connection check frequency
    pub idle_check_frequency: Duration,

    /// Connection pool size
    pub pool_size: u32,

    /// Pool checkout timeout
    pub pool_timeout: Duration,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allow_origins: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggerConfig {
    /// Directory for log files; empty means stdout only
    pub file_path: String,

    /// Output encoding
    pub encoding: LogEncoding,

    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

/// Log output encoding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogEncoding {
    /// Structured JSON lines
    Json,
    /// Human-readable console output
    Console,
}

impl LogEncoding {
    /// Parse the lowercase wire form; `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "console" => Some(Self::Console),
            _ => None,
        }
    }
}

/// Deployment environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnvConfig {
    /// Deployment stage: dev, staging, prod
    pub stage: String,

    /// Application name attached to every log record
    pub app_name: String,
}

/// SQS queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SqsConfig {
    /// Queue name; empty disables the SQS consumer
    pub name: String,
}

/// JWKS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JwksConfig {
    /// Endpoint serving the signing key set; empty disables JWT checks
    pub auth_endpoint: String,
}

/// One Kinesis stream discovered by indexed scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KinesisStreamConfig {
    /// Stream name
    pub name: String,
}

/// One MQTT client descriptor, set as a JSON object string.
///
/// The schema is closed: all three fields are required and unknown
/// fields are rejected, so a typo in an environment value fails
/// assembly instead of producing a half-configured client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct MqttClientConfig {
    /// Client identifier
    pub id: String,

    /// Broker URL, e.g. `tcp://host:1883`
    pub endpoint: String,

    /// Topic the client subscribes to
    pub topic: String,
}
