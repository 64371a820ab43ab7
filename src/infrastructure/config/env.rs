//! Environment variable access behind a substitutable seam.
//!
//! Everything in the config layer reads the environment through
//! [`EnvSource`] so tests can run against a plain `HashMap` instead of
//! mutating process state.

use std::collections::HashMap;

/// Read-only source of named string values.
///
/// Implementations must treat an empty string as absent: the original
/// deployment tooling cannot distinguish `KEY=` from an unset key, and
/// the sentinel scan in the indexed loaders depends on that rule.
pub trait EnvSource {
    /// Look up `key`, returning `None` when unset or empty.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as absent, same as unset.
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

/// Map a dotted configuration key to its environment variable name.
///
/// `server.port` becomes `SERVER_PORT`; the mapping has no special
/// cases.
pub fn env_key(dotted: &str) -> String {
    dotted.replace('.', "_").to_uppercase()
}
