//! Path management for ynab-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `YNAB_LEDGER_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory, e.g. `~/.config/ynab-ledger`
//!    on Linux or `%APPDATA%\ynab-ledger\config` on Windows

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "YNAB_LEDGER_CONFIG_DIR";

/// Manages all paths used by ynab-ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding settings and the saved account classification
    config_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, LedgerError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "ynab-ledger")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { config_dir })
    }

    /// Create LedgerPaths with a custom directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the path to the saved account classification
    pub fn accounts_file(&self) -> PathBuf {
        self.config_dir.join("accounts.yaml")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create config directory: {}", e)))
    }
}
