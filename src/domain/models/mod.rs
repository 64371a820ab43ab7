pub mod config;

pub use config::{
    Config, CorsConfig, EnvConfig, JwksConfig, KinesisStreamConfig, LogEncoding, LoggerConfig,
    MqttClientConfig, PostgresConfig, RedisConfig, ServerConfig, SqsConfig,
};
