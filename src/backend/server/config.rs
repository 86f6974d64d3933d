/**
 * Server Configuration
 *
 * This module resolves the server's configuration once at startup.
 *
 * # Configuration Sources
 *
 * Later sources override earlier ones:
 * 1. Defaults for the selected environment (`APP_ENV`, default `development`)
 * 2. An optional TOML file named by `TODOCOUNT_CONFIG`
 * 3. Environment variables: `SERVER_HOST`, `SERVER_PORT`, `TODO_DB_PATH`,
 *    `COUNTER_DB_PATH`, `CORS_ORIGINS` and `TODOCOUNT_APPS` (both comma-separated)
 *
 * # Error Handling
 *
 * Unparsable values and unreadable files are `ConfigError`s and stop startup.
 * A store that fails to open later is logged and disabled instead, see
 * `server::init`.
 */

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::shared::ConfigError;

/// Environment variable naming the optional TOML config file
pub const CONFIG_FILE_VAR: &str = "TODOCOUNT_CONFIG";

/// Deployment environment; selects the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Service title reported by `GET /`
    pub fn title(&self) -> &'static str {
        match self {
            Self::Development => "Todo & Counter API",
            Self::Test => "Todo & Counter API - Test",
            Self::Production => "Todo & Counter API - Production",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Self::Test => 8001,
            Self::Development | Self::Production => 8000,
        }
    }

    fn default_origins(&self) -> Vec<String> {
        let origins: &[&str] = match self {
            Self::Development => &["http://localhost:5173", "http://localhost:3000"],
            Self::Test => &["http://localhost:5174"],
            Self::Production => &[],
        };
        origins.iter().map(|origin| origin.to_string()).collect()
    }

    fn default_db_path(&self, app: AppKind) -> PathBuf {
        let file = format!("{}_{}.sqlite", app.table(), self);
        match self {
            Self::Test => std::env::temp_dir().join(file),
            Self::Development | Self::Production => PathBuf::from(file),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" | "testing" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidValue {
                key: "APP_ENV",
                value: value.to_string(),
            }),
        }
    }
}

/// One of the two apps the server can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Todo,
    Counter,
}

impl AppKind {
    pub const ALL: [AppKind; 2] = [AppKind::Todo, AppKind::Counter];

    fn table(&self) -> &'static str {
        match self {
            Self::Todo => "todos",
            Self::Counter => "counters",
        }
    }
}

impl FromStr for AppKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "todo" | "todos" => Ok(Self::Todo),
            "counter" | "counters" => Ok(Self::Counter),
            _ => Err(ConfigError::InvalidValue {
                key: "TODOCOUNT_APPS",
                value: value.to_string(),
            }),
        }
    }
}

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub todo_db_path: PathBuf,
    pub counter_db_path: PathBuf,
    /// Allowed CORS origins; empty allows none, `*` allows any
    pub cors_origins: Vec<String>,
    /// Apps whose routes are backed by a store
    pub apps: Vec<AppKind>,
}

/// Shape of the optional TOML file; every key may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    environment: Option<Environment>,
    host: Option<String>,
    port: Option<u16>,
    todo_db_path: Option<PathBuf>,
    counter_db_path: Option<PathBuf>,
    cors_origins: Option<Vec<String>>,
    apps: Option<Vec<AppKind>>,
}

impl FileConfig {
    fn read(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

impl ServerConfig {
    /// Defaults for `environment`, before any file or variable is applied
    pub fn defaults(environment: Environment) -> Self {
        Self {
            environment,
            host: "0.0.0.0".to_string(),
            port: environment.default_port(),
            todo_db_path: environment.default_db_path(AppKind::Todo),
            counter_db_path: environment.default_db_path(AppKind::Counter),
            cors_origins: environment.default_origins(),
            apps: AppKind::ALL.to_vec(),
        }
    }

    /// Test configuration with both store files inside `dir`
    pub fn for_test(dir: &Path) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            todo_db_path: dir.join("todos_test.sqlite"),
            counter_db_path: dir.join("counters_test.sqlite"),
            ..Self::defaults(Environment::Test)
        }
    }

    /// Resolve the configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match lookup(CONFIG_FILE_VAR) {
            Some(path) if !path.trim().is_empty() => FileConfig::read(path.trim())?,
            _ => FileConfig::default(),
        };

        let environment = match lookup("APP_ENV") {
            Some(value) => value.parse()?,
            None => file.environment.unwrap_or_default(),
        };

        let mut config = Self::defaults(environment);
        config.apply_file(file);
        config.apply_env(&lookup)?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(path) = file.todo_db_path {
            self.todo_db_path = path;
        }
        if let Some(path) = file.counter_db_path {
            self.counter_db_path = path;
        }
        if let Some(origins) = file.cors_origins {
            self.cors_origins = origins;
        }
        if let Some(apps) = file.apps {
            self.apps = apps;
        }
    }

    fn apply_env<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("TODO_DB_PATH") {
            self.todo_db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("COUNTER_DB_PATH") {
            self.counter_db_path = PathBuf::from(path);
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.cors_origins = split_list(&origins).map(str::to_string).collect();
        }
        if let Some(apps) = lookup("TODOCOUNT_APPS") {
            self.apps = split_list(&apps)
                .map(str::parse::<AppKind>)
                .collect::<Result<Vec<_>, _>>()?;
        }
        Ok(())
    }

    /// Title reported by `GET /`
    pub fn title(&self) -> &'static str {
        self.environment.title()
    }

    /// `host:port` to bind the listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether `app`'s store should be opened
    pub fn serves(&self, app: AppKind) -> bool {
        self.apps.contains(&app)
    }

    pub fn db_path(&self, app: AppKind) -> &Path {
        match app {
            AppKind::Todo => &self.todo_db_path,
            AppKind::Counter => &self.counter_db_path,
        }
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}
