//! Connection settings for the relational engine.
//!
//! Settings resolve in order: the `.film_search.json` configuration file
//! (path overridable with `--config`), then the `DB_*` environment
//! variables. Neither present is a configuration error that explains both
//! options.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

const DEFAULT_PORT: u16 = 5432;

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Database connection settings
    pub database: DbSettings,
}

/// Everything needed to open the connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbSettings {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    pub database: String,
}

impl ConfigFile {
    /// Load and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SearchError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| SearchError::Config {
            message: format!("invalid JSON in {}: {}", path.display(), e),
        })
    }
}

impl DbSettings {
    /// Read settings from the `DB_*` environment variables.
    ///
    /// Returns `None` unless `DB_HOST`, `DB_USER` and `DB_NAME` are all
    /// set; `DB_PORT` and `DB_PASSWORD` are optional.
    pub fn from_env() -> Result<Option<Self>> {
        let (Ok(host), Ok(user), Ok(database)) = (
            env::var("DB_HOST"),
            env::var("DB_USER"),
            env::var("DB_NAME"),
        ) else {
            return Ok(None);
        };

        let port = match env::var("DB_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SearchError::Config {
                message: format!("DB_PORT is not a valid port number: '{}'", raw),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Some(Self {
            host,
            port,
            user,
            password: env::var("DB_PASSWORD").ok(),
            database,
        }))
    }

    /// Resolve settings: config file first, environment second.
    pub fn resolve(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            return ConfigFile::load(config_path).map(|file| file.database);
        }

        if let Some(settings) = Self::from_env()? {
            return Ok(settings);
        }

        Err(SearchError::Config {
            message: format!(
                "no connection settings found\n\n\
                 Create {} :\n\
                 {{\n  \
                   \"database\": {{\n    \
                     \"host\": \"localhost\",\n    \
                     \"port\": 5432,\n    \
                     \"user\": \"postgres\",\n    \
                     \"password\": \"secret\",\n    \
                     \"database\": \"pagila\"\n  \
                   }}\n\
                 }}\n\n\
                 or set the environment variables DB_HOST, DB_USER, DB_NAME\n\
                 (optionally DB_PORT, DB_PASSWORD).",
                config_path.display()
            ),
        })
    }
}
