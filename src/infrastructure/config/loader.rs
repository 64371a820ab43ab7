//! Configuration assembly: defaults, environment overlay, typed decode.

use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;

use crate::domain::models::config::{
    Config, CorsConfig, EnvConfig, JwksConfig, LogEncoding, LoggerConfig, PostgresConfig,
    RedisConfig, ServerConfig, SqsConfig,
};
use crate::infrastructure::config::defaults::DEFAULTS;
use crate::infrastructure::config::env::{env_key, EnvSource};
use crate::infrastructure::config::indexed;

/// Environment variable prefix for the indexed Kinesis stream list.
pub const KINESIS_STREAM_PREFIX: &str = "KINESIS_STREAM";

/// Environment variable prefix for the indexed MQTT client list.
pub const MQTT_CLIENT_PREFIX: &str = "MQTT_CLIENT";

/// Fixed alias keys appended to the MQTT client list after the
/// numeric scan, in this order.
pub const MQTT_CLIENT_ALIASES: &[&str] = &["MQTT_CLIENT_GTW"];

/// Configuration error types.
///
/// All variants are fatal: the caller must abort startup rather than
/// run with a partial or default-substituted configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A fixed key had neither a default nor an override. Defensive:
    /// unreachable as long as the defaults table stays complete.
    #[error("Missing required configuration key: {key}")]
    MissingKey {
        /// Dotted configuration key
        key: String,
    },

    /// An overlaid value could not be coerced to the declared type.
    #[error("Invalid value for {key}: expected {expected}")]
    TypeMismatch {
        /// Dotted configuration key
        key: String,
        /// Human-readable declared type
        expected: &'static str,
    },

    /// An indexed or aliased JSON entry failed schema decode.
    #[error("Malformed entry in {key}: {source}")]
    MalformedEntry {
        /// Environment variable name of the offending entry
        key: String,
        /// Underlying decode failure
        source: serde_json::Error,
    },
}

/// Flat key/value view of defaults with environment overrides applied.
///
/// Typed accessors consume it during decode; every coercion failure
/// names the dotted key it happened on.
struct Overlay {
    values: BTreeMap<&'static str, String>,
}

impl Overlay {
    fn build(env: &dyn EnvSource) -> Self {
        let mut values: BTreeMap<&'static str, String> = DEFAULTS
            .iter()
            .map(|(key, value)| (*key, (*value).to_string()))
            .collect();

        for (key, value) in &mut values {
            if let Some(override_value) = env.lookup(&env_key(key)) {
                *value = override_value;
            }
        }

        Self { values }
    }

    fn string(&self, key: &str) -> Result<String, ConfigError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::MissingKey {
                key: key.to_string(),
            })
    }

    fn u32(&self, key: &str) -> Result<u32, ConfigError> {
        self.string(key)?
            .parse()
            .map_err(|_| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "unsigned integer",
            })
    }

    fn seconds(&self, key: &str) -> Result<Duration, ConfigError> {
        let secs: u64 = self
            .string(key)?
            .parse()
            .map_err(|_| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "duration in whole seconds",
            })?;
        Ok(Duration::from_secs(secs))
    }

    fn millis(&self, key: &str) -> Result<Duration, ConfigError> {
        let millis: u64 = self
            .string(key)?
            .parse()
            .map_err(|_| ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "duration in whole milliseconds",
            })?;
        Ok(Duration::from_millis(millis))
    }

    fn encoding(&self, key: &str) -> Result<LogEncoding, ConfigError> {
        let raw = self.string(key)?;
        LogEncoding::parse(&raw).ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: "one of: json, console",
        })
    }
}

/// Assembles the configuration tree from defaults and an environment
/// source.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Assemble the full configuration.
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in defaults (complete over the fixed tree)
    /// 2. Environment variables (dotted keys mapped per [`env_key`])
    ///
    /// After the fixed tree decodes, the two indexed collections are
    /// discovered by sentinel scan and attached. Assembly is
    /// fail-fast: the first coercion or decode error is returned and
    /// no partial tree ever escapes.
    pub fn load(env: &dyn EnvSource) -> Result<Config, ConfigError> {
        let overlay = Overlay::build(env);

        let server = ServerConfig {
            port: overlay.string("server.port")?,
            runmode: overlay.string("server.runmode")?,
            domain: overlay.string("server.domain")?,
        };

        let logger = LoggerConfig {
            file_path: overlay.string("logger.filepath")?,
            encoding: overlay.encoding("logger.encoding")?,
            level: overlay.string("logger.level")?,
        };

        let postgres = PostgresConfig {
            host: overlay.string("postgres.host")?,
            port: overlay.string("postgres.port")?,
            user: overlay.string("postgres.user")?,
            password: overlay.string("postgres.password")?,
            dbname: overlay.string("postgres.dbname")?,
            sslmode: overlay.string("postgres.sslmode")?,
            max_idle_conns: overlay.u32("postgres.maxidleconns")?,
            max_open_conns: overlay.u32("postgres.maxopenconns")?,
            conn_max_lifetime: overlay.seconds("postgres.connmaxlifetime")?,
        };

        let redis = RedisConfig {
            host: overlay.string("redis.host")?,
            port: overlay.string("redis.port")?,
            password: overlay.string("redis.password")?,
            db: overlay.string("redis.db")?,
            dial_timeout: overlay.seconds("redis.dialtimeout")?,
            read_timeout: overlay.seconds("redis.readtimeout")?,
            write_timeout: overlay.seconds("redis.writetimeout")?,
            idle_check_frequency: overlay.millis("redis.idlecheckfrequency")?,
            pool_size: overlay.u32("redis.poolsize")?,
            pool_timeout: overlay.seconds("redis.pooltimeout")?,
        };

        let cors = CorsConfig {
            allow_origins: overlay.string("cors.alloworigins")?,
        };

        let env_config = EnvConfig {
            stage: overlay.string("env.stage")?,
            app_name: overlay.string("env.appname")?,
        };

        let sqs = SqsConfig {
            name: overlay.string("sqs.name")?,
        };

        let jwks = JwksConfig {
            auth_endpoint: overlay.string("jwks.authendpoint")?,
        };

        let kinesis = indexed::load_streams(env, KINESIS_STREAM_PREFIX);
        let mqtt = indexed::load_clients(env, MQTT_CLIENT_PREFIX, MQTT_CLIENT_ALIASES)?;

        Ok(Config {
            server,
            postgres,
            redis,
            cors,
            logger,
            env: env_config,
            sqs,
            jwks,
            kinesis,
            mqtt,
        })
    }
}
