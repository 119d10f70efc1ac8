//! Configuration handling for the application.
//!
//! The engine itself needs no configuration; only the storage collaborator
//! does. This module is structured so additional settings (score weight
//! overrides, custom vocabulary files) can be added later without touching
//! callers. `Config::from_env` performs the loading with sensible
//! development defaults.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests and build
/// scripts refer to them if needed later.
pub const ENV_DATABASE_PATH: &str = "RESUMATCH_DB";

/// Default development values used when environment variables are absent.
const DEFAULT_DATABASE_PATH: &str = "resumatch.db";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    database_path: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// Load from environment variables, falling back to development
    /// defaults.
    ///
    /// This never fails today because we only do simple string extraction.
    /// Future validation (e.g. rejecting unwritable paths) can cause it to
    /// return a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path =
            env::var(ENV_DATABASE_PATH).unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        Ok(Self { database_path })
    }

    /// Path of the SQLite database file used for persisted analyses.
    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
