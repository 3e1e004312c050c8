//! Writes a manifest's enabled shortcuts as Steam ROM Manager JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::expand_home;
use crate::error::{Result, SrmError};
use crate::manifest::{ExportRecord, Manifest};

/// Shortcut statistics for one export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteStats {
    /// Raw entries in the manifest, invalid ones included.
    pub total: usize,
    /// `total - disabled`.
    pub enabled: usize,
    pub disabled: usize,
    pub invalid: usize,
    /// `enabled - invalid`.
    pub valid: usize,
    /// `disabled + invalid`.
    pub skipped: usize,
    /// Records actually exported.
    pub ok: usize,
}

/// Report of one [`write_manifest`] call.
#[derive(Debug, Clone, Serialize)]
pub struct WriteResult {
    pub manifest_name: String,
    pub manifest_path: String,
    pub output_path: PathBuf,
    pub records: Vec<ExportRecord>,
    pub stats: WriteStats,
    /// False when there was nothing enabled and the write was skipped.
    pub written: bool,
}

impl WriteResult {
    /// Build the report for `manifest` without touching the filesystem.
    pub fn preview(manifest: &Manifest) -> Self {
        let records = manifest.export_records();
        let counts = manifest.shortcut_counts();
        let enabled = counts.total - counts.disabled;
        let stats = WriteStats {
            total: counts.total,
            enabled,
            disabled: counts.disabled,
            invalid: counts.invalid,
            valid: enabled.saturating_sub(counts.invalid),
            skipped: counts.disabled + counts.invalid,
            ok: records.len(),
        };

        Self {
            manifest_name: manifest.name(),
            manifest_path: manifest.file_path().to_string(),
            output_path: expand_home(Path::new(manifest.output_path())),
            records,
            stats,
            written: false,
        }
    }
}

/// Serialize export records exactly as they are written to disk.
pub fn render_json(records: &[ExportRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Export a manifest to its output path.
///
/// Performs at most one filesystem write, overwriting any existing file.
/// Nothing is written when no shortcut is enabled. Parent directories are
/// not created; a failed write is an error for this manifest only.
#[instrument(skip(manifest), fields(manifest = %manifest.name(), output = %manifest.output_path()))]
pub async fn write_manifest(manifest: &Manifest) -> Result<WriteResult> {
    let mut result = WriteResult::preview(manifest);

    if result.records.is_empty() {
        info!(total = result.stats.total, "No enabled shortcuts, skipping write");
        return Ok(result);
    }

    let json = render_json(&result.records)?;
    debug!(bytes = json.len(), records = result.records.len(), "Writing export");

    tokio::fs::write(&result.output_path, json)
        .await
        .map_err(|source| SrmError::WriteFailed {
            path: result.output_path.display().to_string(),
            source,
        })?;

    result.written = true;
    info!(
        ok = result.stats.ok,
        total = result.stats.total,
        "Export written"
    );
    Ok(result)
}
