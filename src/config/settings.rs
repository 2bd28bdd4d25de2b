//! User settings for ynab-ledger
//!
//! Defaults for the conversion options, so a regular export can be converted
//! without repeating the same flags every time.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Culture;

/// User settings for ynab-ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Culture the export's amounts and dates are written in
    #[serde(default = "default_culture")]
    pub culture: String,

    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Whether to write the cleared marker (`*`/`!`) in transaction headers
    #[serde(default = "default_use_clear")]
    pub use_clear: bool,

    /// Default output file name
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_culture() -> String {
    "en-US".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_use_clear() -> bool {
    true
}

fn default_output_file() -> String {
    "register.dat".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            culture: default_culture(),
            delimiter: default_delimiter(),
            use_clear: default_use_clear(),
            output_file: default_output_file(),
        }
    }
}

impl Settings {
    /// The configured culture
    pub fn culture(&self) -> Result<Culture, LedgerError> {
        Culture::lookup(&self.culture)
    }

    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))
    }
}
