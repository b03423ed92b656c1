//! User settings for warikan
//!
//! Display and journaling preferences. Every field has a default so older or
//! hand-edited config files keep loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::WarikanPaths;
use crate::error::WarikanError;

/// User settings for warikan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether committed changes are appended to the audit journal
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Directory for export files, overriding `<base>/exports`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            audit_enabled: default_audit_enabled(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &WarikanPaths) -> Result<Self, WarikanError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WarikanError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| WarikanError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WarikanPaths) -> Result<(), WarikanError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| WarikanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| WarikanError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The directory exports land in when given a bare file name
    pub fn resolve_export_dir(&self, paths: &WarikanPaths) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| paths.export_dir())
    }
}
