use crate::{ConfigError, DEFAULT_DATABASE_FILENAME, DEFAULT_JSON_FILENAME};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where the profile record lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseBackend {
    /// JSON document stored in a single SQLite row
    #[default]
    Sqlite,
    /// Flat JSON file
    JsonFile,
}

impl DatabaseBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseBackend::Sqlite => "sqlite",
            DatabaseBackend::JsonFile => "json_file",
        }
    }

    fn default_filename(&self) -> &'static str {
        match self {
            DatabaseBackend::Sqlite => DEFAULT_DATABASE_FILENAME,
            DatabaseBackend::JsonFile => DEFAULT_JSON_FILENAME,
        }
    }
}

impl FromStr for DatabaseBackend {
    type Err = ConfigError;

    /// Accepts exactly the names `config.toml` accepts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(DatabaseBackend::Sqlite),
            "json_file" => Ok(DatabaseBackend::JsonFile),
            other => Err(ConfigError::database(format!(
                "unknown database.backend '{}', expected 'sqlite' or 'json_file'",
                other
            ))),
        }
    }
}

impl fmt::Display for DatabaseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: DatabaseBackend,
    /// File name relative to the config directory. Defaults per backend.
    pub path: Option<String>,
}

impl DatabaseConfig {
    pub fn file_name(&self) -> &str {
        self.path
            .as_deref()
            .unwrap_or_else(|| self.backend.default_filename())
    }
}
