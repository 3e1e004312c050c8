//! Discovery of manifest files in directories.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, trace};

/// Result of scanning a directory for manifests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Manifest files, sorted by file name.
    pub manifests: Vec<PathBuf>,
    /// Files without a YAML extension.
    pub ignored: Vec<PathBuf>,
}

impl ScanResult {
    pub fn has_manifests(&self) -> bool {
        !self.manifests.is_empty()
    }
}

/// Errors that can occur during directory scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {0}: {1}")]
    ReadError(PathBuf, #[source] io::Error),

    #[error("failed to read directory entry: {0}")]
    EntryError(#[source] io::Error),
}

/// True for `.yml` / `.yaml` files (so `.manifest.yml` too), any case.
pub fn is_manifest_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"))
}

/// Lists the manifest files directly inside `dir`.
///
/// Subdirectories are not descended into. Entries are sorted by file name
/// so runs are deterministic.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_directory(dir: &Path) -> Result<ScanResult, ScanError> {
    debug!("Scanning for manifests");

    if !dir.exists() {
        return Err(ScanError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let dir_entries =
        std::fs::read_dir(dir).map_err(|e| ScanError::ReadError(dir.to_path_buf(), e))?;

    let mut entries: Vec<_> = dir_entries
        .collect::<Result<Vec<_>, io::Error>>()
        .map_err(ScanError::EntryError)?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut result = ScanResult::default();
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            trace!(path = %path.display(), "Skipping directory");
            continue;
        }
        if is_manifest_file(&path) {
            trace!(path = %path.display(), "Found manifest");
            result.manifests.push(path);
        } else {
            trace!(path = %path.display(), "Ignoring non-manifest file");
            result.ignored.push(path);
        }
    }

    info!(
        manifests = result.manifests.len(),
        ignored = result.ignored.len(),
        "Directory scan complete"
    );
    Ok(result)
}

/// Expand a list of files and directories into manifest paths.
///
/// Directories are scanned and their non-manifest files reported in
/// `ignored`. Anything else is kept as given so a missing file is reported
/// when it is read. Duplicates keep their first position.
pub fn collect_manifest_paths(inputs: &[PathBuf]) -> Result<ScanResult, ScanError> {
    let mut collected = ScanResult::default();
    for input in inputs {
        let found = if input.is_dir() {
            let scanned = scan_directory(input)?;
            collected.ignored.extend(scanned.ignored);
            scanned.manifests
        } else {
            vec![input.clone()]
        };
        for path in found {
            if !collected.manifests.contains(&path) {
                collected.manifests.push(path);
            }
        }
    }
    Ok(collected)
}
