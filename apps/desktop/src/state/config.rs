//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INVENTORY_*`)
//! 2. Defaults (this file): files in the working directory
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "inventory.db";

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "inventory.log";

/// Default `EnvFilter` directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,inventory=debug,sqlx=warn";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// SQLite file holding the `inventory` table.
    pub database_path: PathBuf,

    /// File the tracing subscriber writes to. The terminal belongs to the UI.
    pub log_path: PathBuf,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INVENTORY_DB_PATH`: Override the database file
    /// - `INVENTORY_LOG_PATH`: Override the log file
    pub fn from_env() -> Self {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("INVENTORY_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("INVENTORY_LOG_PATH").filter(|p| !p.trim().is_empty()) {
            config.log_path = PathBuf::from(path);
        }

        config
    }
}
