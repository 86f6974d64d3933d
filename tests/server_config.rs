//! `ServerConfig::load` against the real process environment

#[macro_use]
mod common;

use serial_test::serial;
use std::path::PathBuf;
use todocount::backend::server::config::{AppKind, Environment, ServerConfig, CONFIG_FILE_VAR};
use todocount::shared::ConfigError;

const VARS: [&str; 8] = [
    "APP_ENV",
    "SERVER_HOST",
    "SERVER_PORT",
    "TODO_DB_PATH",
    "COUNTER_DB_PATH",
    "CORS_ORIGINS",
    "TODOCOUNT_APPS",
    CONFIG_FILE_VAR,
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_from_environment() {
    clear_env();
    std::env::set_var("APP_ENV", "test");
    std::env::set_var("SERVER_PORT", "9001");
    std::env::set_var("COUNTER_DB_PATH", "/tmp/custom_counters.sqlite");
    std::env::set_var("TODOCOUNT_APPS", "todo, counter");

    let config = assert_ok!(ServerConfig::load());
    clear_env();

    assert_eq!(config.environment, Environment::Test);
    assert_eq!(config.port, 9001);
    assert_eq!(config.counter_db_path, PathBuf::from("/tmp/custom_counters.sqlite"));
    assert_eq!(config.apps, vec![AppKind::Todo, AppKind::Counter]);
    assert_eq!(config.cors_origins, vec!["http://localhost:5174"]);
}

#[test]
#[serial]
fn test_load_with_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("todocount.toml");
    std::fs::write(&file, "host = \"127.0.0.1\"\nport = 8100\n").unwrap();
    std::env::set_var(CONFIG_FILE_VAR, &file);

    let config = assert_ok!(ServerConfig::load());
    clear_env();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.bind_address(), "127.0.0.1:8100");
}

#[test]
#[serial]
fn test_load_rejects_bad_port() {
    clear_env();
    std::env::set_var("SERVER_PORT", "70000");

    let result = ServerConfig::load();
    clear_env();

    assert_err!(result, ConfigError::InvalidValue { key: "SERVER_PORT", .. });
}
