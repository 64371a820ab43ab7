//! Fallback values for every fixed configuration key.
//!
//! This is a closed set: the decode in the loader only reads keys
//! listed here, so an environment with nothing relevant set always
//! assembles successfully.

/// All `(dotted key, default value)` pairs for the fixed-shape tree.
///
/// Values are strings regardless of declared field type; coercion
/// happens once, in the loader, identically for defaults and
/// environment overrides.
pub const DEFAULTS: &[(&str, &str)] = &[
    // Server
    ("server.port", "8080"),
    ("server.runmode", "debug"),
    ("server.domain", "localhost"),
    // Logger
    ("logger.filepath", "logs/"),
    ("logger.encoding", "json"),
    ("logger.level", "debug"),
    // Postgres
    ("postgres.host", "localhost"),
    ("postgres.port", "5432"),
    ("postgres.user", "postgres"),
    ("postgres.password", "postgres"),
    ("postgres.dbname", "postgres"),
    ("postgres.sslmode", "disable"),
    ("postgres.maxidleconns", "15"),
    ("postgres.maxopenconns", "100"),
    ("postgres.connmaxlifetime", "5"),
    // Redis
    ("redis.host", "localhost"),
    ("redis.port", "6379"),
    ("redis.password", "password"),
    ("redis.db", "0"),
    ("redis.dialtimeout", "5"),
    ("redis.readtimeout", "5"),
    ("redis.writetimeout", "5"),
    ("redis.idlecheckfrequency", "500"),
    ("redis.poolsize", "10"),
    ("redis.pooltimeout", "15"),
    // Cors
    ("cors.alloworigins", "*"),
    // Env
    ("env.stage", "dev"),
    ("env.appname", "api"),
    // Sqs
    ("sqs.name", ""),
    // Jwks
    ("jwks.authendpoint", ""),
];
