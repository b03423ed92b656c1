//! Path management for warikan
//!
//! ## Path Resolution Order
//!
//! 1. `WARIKAN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/warikan` or `~/.config/warikan`
//! 3. Windows: `%APPDATA%\warikan`
//!
//! The ledger itself is never stored; these paths hold settings, the audit
//! journal, and export files.

use std::path::PathBuf;

use crate::error::WarikanError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "WARIKAN_DATA_DIR";

/// Manages all paths used by warikan
#[derive(Debug, Clone)]
pub struct WarikanPaths {
    base_dir: PathBuf,
}

impl WarikanPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, WarikanError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to config.json
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the audit journal
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default directory for export files
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Create the base and export directories
    pub fn ensure_directories(&self) -> Result<(), WarikanError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WarikanError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| WarikanError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WarikanError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                WarikanError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("warikan"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WarikanError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WarikanError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("warikan"))
}
