//! Sentinel-terminated discovery of indexed environment collections.
//!
//! Entries live in independent variables `PREFIX_0`, `PREFIX_1`, …
//! so each one can be injected separately by deployment tooling. The
//! scan stops at the first absent index: a gap hides every higher
//! index, and that is the documented contract for sparse setups, not
//! an accident.

use crate::domain::models::config::{KinesisStreamConfig, MqttClientConfig};
use crate::infrastructure::config::env::EnvSource;
use crate::infrastructure::config::loader::ConfigError;

/// Discover scalar stream entries under `{prefix}_{i}`.
///
/// Returns the entries in index order, possibly empty. Duplicate
/// names are legal and preserved. This loader cannot fail: any value
/// that is present is taken verbatim.
pub fn load_streams(env: &dyn EnvSource, prefix: &str) -> Vec<KinesisStreamConfig> {
    let mut streams = Vec::new();

    for i in 0usize.. {
        let Some(name) = env.lookup(&format!("{prefix}_{i}")) else {
            break;
        };
        streams.push(KinesisStreamConfig { name });
    }

    streams
}

/// Discover structured client entries under `{prefix}_{i}`, then the
/// fixed `aliases` in the given order.
///
/// Every discovered value must decode as a complete client object;
/// the first malformed value aborts with [`ConfigError::MalformedEntry`]
/// naming the offending variable. Numeric entries always precede
/// alias entries in the result.
///
/// Alias keys are optional, but the walk stops at the first absent
/// alias rather than skipping it. With a single alias the two
/// policies coincide; the behavior is pinned by tests so changing it
/// is a visible contract change.
pub fn load_clients(
    env: &dyn EnvSource,
    prefix: &str,
    aliases: &[&str],
) -> Result<Vec<MqttClientConfig>, ConfigError> {
    let mut clients = Vec::new();

    for i in 0usize.. {
        let key = format!("{prefix}_{i}");
        let Some(raw) = env.lookup(&key) else {
            break;
        };
        clients.push(parse_client(&key, &raw)?);
    }

    for alias in aliases {
        let Some(raw) = env.lookup(alias) else {
            break;
        };
        clients.push(parse_client(alias, &raw)?);
    }

    Ok(clients)
}

fn parse_client(key: &str, raw: &str) -> Result<MqttClientConfig, ConfigError> {
    serde_json::from_str(raw).map_err(|source| ConfigError::MalformedEntry {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn client_json(id: &str) -> String {
        format!(r#"{{"id":"{id}","endpoint":"tcp://h:1883","topic":"t"}}"#)
    }

    #[test]
    fn test_streams_empty_env() {
        let env = env_of(&[]);
        assert!(load_streams(&env, "KINESIS_STREAM").is_empty());
    }

    #[test]
    fn test_streams_contiguous() {
        let env = env_of(&[
            ("KINESIS_STREAM_0", "orders"),
            ("KINESIS_STREAM_1", "payments"),
            ("KINESIS_STREAM_2", "audit"),
        ]);

        let streams = load_streams(&env, "KINESIS_STREAM");
        let names: Vec<_> = streams.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["orders", "payments", "audit"]);
    }

    #[test]
    fn test_streams_gap_stops_scan() {
        // Index 0 missing hides index 1 entirely.
        let env = env_of(&[("KINESIS_STREAM_1", "payments")]);
        assert!(load_streams(&env, "KINESIS_STREAM").is_empty());

        // A later gap truncates, no look-ahead past it.
        let env = env_of(&[
            ("KINESIS_STREAM_0", "orders"),
            ("KINESIS_STREAM_2", "audit"),
        ]);
        let streams = load_streams(&env, "KINESIS_STREAM");
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].name, "orders");
    }

    #[test]
    fn test_streams_empty_value_is_a_gap() {
        let env = env_of(&[("KINESIS_STREAM_0", ""), ("KINESIS_STREAM_1", "payments")]);
        assert!(load_streams(&env, "KINESIS_STREAM").is_empty());
    }

    #[test]
    fn test_streams_duplicates_preserved() {
        let env = env_of(&[
            ("KINESIS_STREAM_0", "orders"),
            ("KINESIS_STREAM_1", "orders"),
        ]);
        let streams = load_streams(&env, "KINESIS_STREAM");
        assert_eq!(streams.len(), 2);
    }

    #[test]
    fn test_clients_numeric_scan() {
        let env = env_of(&[
            ("MQTT_CLIENT_0", &client_json("a")),
            ("MQTT_CLIENT_1", &client_json("b")),
        ]);

        let clients = load_clients(&env, "MQTT_CLIENT", &[]).unwrap();
        let ids: Vec<_> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_clients_gap_stops_scan() {
        let env = env_of(&[("MQTT_CLIENT_1", &client_json("b"))]);
        let clients = load_clients(&env, "MQTT_CLIENT", &[]).unwrap();
        assert!(clients.is_empty());
    }

    #[test]
    fn test_clients_malformed_json_names_key() {
        let env = env_of(&[
            ("MQTT_CLIENT_0", &client_json("a")),
            ("MQTT_CLIENT_1", "{not json"),
        ]);

        let err = load_clients(&env, "MQTT_CLIENT", &[]).unwrap_err();
        match err {
            ConfigError::MalformedEntry { key, .. } => assert_eq!(key, "MQTT_CLIENT_1"),
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_clients_missing_field_is_malformed() {
        let env = env_of(&[("MQTT_CLIENT_0", r#"{"id":"a"}"#)]);

        let err = load_clients(&env, "MQTT_CLIENT", &[]).unwrap_err();
        match err {
            ConfigError::MalformedEntry { key, .. } => assert_eq!(key, "MQTT_CLIENT_0"),
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_clients_alias_appended_after_numeric() {
        let env = env_of(&[
            ("MQTT_CLIENT_0", &client_json("a")),
            ("MQTT_CLIENT_GTW", &client_json("gtw")),
        ]);

        let clients = load_clients(&env, "MQTT_CLIENT", &["MQTT_CLIENT_GTW"]).unwrap();
        let ids: Vec<_> = clients.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "gtw"]);
    }

    #[test]
    fn test_clients_alias_only() {
        let env = env_of(&[("MQTT_CLIENT_GTW", &client_json("gtw"))]);

        let clients = load_clients(&env, "MQTT_CLIENT", &["MQTT_CLIENT_GTW"]).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, "gtw");
    }

    #[test]
    fn test_clients_malformed_alias_names_key() {
        let env = env_of(&[("MQTT_CLIENT_GTW", "nope")]);

        let err = load_clients(&env, "MQTT_CLIENT", &["MQTT_CLIENT_GTW"]).unwrap_err();
        match err {
            ConfigError::MalformedEntry { key, .. } => assert_eq!(key, "MQTT_CLIENT_GTW"),
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_clients_first_absent_alias_ends_alias_walk() {
        // Pinned contract: the alias walk stops at the first unset
        // alias, it does not skip to later ones.
        let env = env_of(&[("MQTT_CLIENT_AUX", &client_json("aux"))]);

        let clients = load_clients(
            &env,
            "MQTT_CLIENT",
            &["MQTT_CLIENT_GTW", "MQTT_CLIENT_AUX"],
        )
        .unwrap();
        assert!(clients.is_empty());
    }

    proptest! {
        #[test]
        fn prop_contiguous_streams_round_trip(names in proptest::collection::vec("[a-z]{1,12}", 0..8)) {
            let mut env = HashMap::new();
            for (i, name) in names.iter().enumerate() {
                env.insert(format!("KINESIS_STREAM_{i}"), name.clone());
            }

            let streams = load_streams(&env, "KINESIS_STREAM");
            let got: Vec<_> = streams.into_iter().map(|s| s.name).collect();
            prop_assert_eq!(got, names);
        }

        #[test]
        fn prop_gap_truncates_at_gap_index(
            names in proptest::collection::vec("[a-z]{1,12}", 2..8),
            gap in 0usize..7,
        ) {
            prop_assume!(gap < names.len());

            let mut env = HashMap::new();
            for (i, name) in names.iter().enumerate() {
                if i != gap {
                    env.insert(format!("KINESIS_STREAM_{i}"), name.clone());
                }
            }

            let streams = load_streams(&env, "KINESIS_STREAM");
            prop_assert_eq!(streams.len(), gap);
        }
    }
}
