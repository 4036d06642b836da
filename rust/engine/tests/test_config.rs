use std::collections::HashMap;
use std::fs;

use landlord_engine::config::{ConfigError, EngineConfig, DEFAULT_MAX_TURNS, ENV_MAX_TURNS, ENV_SEED};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.max_turns, DEFAULT_MAX_TURNS);
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), cfg);
}

#[test]
fn toml_overrides_defaults() {
    let cfg = EngineConfig::from_toml_str("seed = 9\nmax_turns = 40\n").unwrap();
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.max_turns, 40);

    let cfg = EngineConfig::from_toml_str("seed = 3").unwrap();
    assert_eq!(cfg.max_turns, DEFAULT_MAX_TURNS);
}

#[test]
fn rejects_bad_documents() {
    assert!(matches!(
        EngineConfig::from_toml_str("max_turns = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("seed = \"abc\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("landlord.toml");
    fs::write(&path, "seed = 17\n").unwrap();
    let cfg = EngineConfig::from_file(&path).unwrap();
    assert_eq!(cfg.seed, Some(17));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        EngineConfig::from_file(&missing),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn environment_overrides() {
    let cfg = EngineConfig::default()
        .with_env_from(env(&[(ENV_SEED, "123"), (ENV_MAX_TURNS, "80")]))
        .unwrap();
    assert_eq!(cfg.seed, Some(123));
    assert_eq!(cfg.max_turns, 80);

    let cfg = EngineConfig::default()
        .with_env_from(env(&[(ENV_SEED, "")]))
        .unwrap();
    assert_eq!(cfg.seed, None);
}

#[test]
fn environment_values_are_validated() {
    assert!(matches!(
        EngineConfig::default().with_env_from(env(&[(ENV_SEED, "x")])),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        EngineConfig::default().with_env_from(env(&[(ENV_MAX_TURNS, "0")])),
        Err(ConfigError::Invalid(_))
    ));
}
