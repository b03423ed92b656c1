//! Export handling for the session
//!
//! Resolves the target path and writes the chosen format.

use crate::config::{Settings, WarikanPaths};
use crate::error::{WarikanError, WarikanResult};
use crate::export::{export_expenses_csv, export_snapshot_json};
use crate::store::LedgerStore;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (members and expenses)
    Json,
}

/// Where an export should be written.
///
/// A bare file name lands in the configured export directory; anything with a
/// directory component is used as given.
pub fn resolve_export_path(output: &Path, settings: &Settings, paths: &WarikanPaths) -> PathBuf {
    let has_dir = output.is_absolute()
        || output
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty());

    if has_dir {
        output.to_path_buf()
    } else {
        settings.resolve_export_dir(paths).join(output)
    }
}

/// Write an export of `store` and return the path written
pub fn write_export(
    store: &LedgerStore,
    format: ExportFormat,
    output: &Path,
    settings: &Settings,
    paths: &WarikanPaths,
) -> WarikanResult<PathBuf> {
    let path = resolve_export_path(output, settings, paths);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| WarikanError::Export(format!("Failed to create export directory: {}", e)))?;
    }

    let file = File::create(&path)
        .map_err(|e| WarikanError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(store, &mut writer)?,
        ExportFormat::Json => export_snapshot_json(store, &mut writer)?,
    }
    writer.flush()?;

    Ok(path)
}
