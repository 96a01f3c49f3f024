//! Integration tests for loading environment-specific config files.
//!
//! These tests exercise the public API end to end: a file is written to a
//! temporary directory, resolved through `ConfigLoader`, and queried through
//! the typed accessors.

use keyed_config::{ConfigError, ConfigLoader, Environment, KeyedStore, Value, load_config};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

const APP_CONFIG: &str = r#"{
    "name": "billing",
    "database": {
        "host": "localhost",
        "port": 5432,
        "ssl": true,
        "pool": {"min": 2, "max": 10.0, "idle_timeout": 2.5}
    },
    "features": {"beta": false},
    "replicas": ["a", "b"]
}"#;

fn write_app_config(dir: &TempDir, env: &str) {
    fs::write(dir.path().join(format!("app.{env}.json")), APP_CONFIG).unwrap();
}

fn load_app(dir: &TempDir, env: &str) -> KeyedStore {
    ConfigLoader::new(dir.path(), "app")
        .with_environment(Environment::new(env))
        .load()
        .expect("config should load")
}

#[test]
fn test_database_scenario_from_disk() {
    let dir = TempDir::new().unwrap();
    write_app_config(&dir, "dev");
    let store = load_app(&dir, "dev");

    assert_eq!(store.get_string("database.host"), "localhost");
    assert_eq!(store.get_int("database.port"), 5432);
    assert!(store.get_bool("database.ssl"));
    assert_eq!(store.get_string("database.missing"), "");
    assert_eq!(store.get_int("database.host"), 0);
    assert_eq!(store.get_string("nope.host"), "");
}

#[test]
fn test_nested_numeric_lookups() {
    let dir = TempDir::new().unwrap();
    write_app_config(&dir, "prod");
    let store = load_app(&dir, "PROD");

    assert_eq!(store.get_uint("database.pool.min"), 2);
    assert_eq!(store.get_int("database.pool.max"), 10);
    assert_eq!(store.get_float("database.pool.idle_timeout"), 2.5);
    assert_eq!(store.get_int("database.pool.idle_timeout"), 2);
}

#[test]
fn test_false_and_missing_are_distinguishable_via_options() {
    let dir = TempDir::new().unwrap();
    write_app_config(&dir, "dev");
    let store = load_app(&dir, "dev");

    assert!(!store.get_bool("features.beta"));
    assert!(!store.get_bool("features.gamma"));
    assert_eq!(store.bool("features.beta"), Some(false));
    assert_eq!(store.bool("features.gamma"), None);
}

#[test]
fn test_arrays_load_but_are_not_addressable() {
    let dir = TempDir::new().unwrap();
    write_app_config(&dir, "dev");
    let store = load_app(&dir, "dev");

    assert!(matches!(store.lookup("replicas"), Some(Value::Array(items)) if items.len() == 2));
    assert_eq!(store.get_string("replicas.0"), "");
}

#[test]
fn test_load_error_names_resolved_path() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::new(dir.path(), "app")
        .with_environment(Environment::new("qa"))
        .load();

    match result {
        Err(ConfigError::Read { path, .. }) => {
            assert_eq!(path, dir.path().join("app.qa.json"));
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_load_config_entry_point_reads_env() {
    let dir = TempDir::new().unwrap();
    write_app_config(&dir, "prod");

    temp_env::with_var("ENV", Some("PROD"), || {
        let store = load_config(dir.path(), "app").expect("prod config should load");
        assert_eq!(store.file_name(), Some("app.prod.json"));
        assert_eq!(store.get_string("name"), "billing");
    });
}

#[test]
#[serial]
fn test_load_config_without_env_uses_dev() {
    let dir = TempDir::new().unwrap();

    temp_env::with_var_unset("ENV", || {
        let err = load_config(dir.path(), "app").unwrap_err();
        assert!(err.path().ends_with("app.dev.json"));
    });
}
