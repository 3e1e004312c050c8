//! The validated manifest model.

use std::path::Path;

use serde::Serialize;

use super::shortcut::{ExportRecord, Shortcut};
use super::validation::ValidationCounts;

/// Extensions stripped, repeatedly, when deriving a fallback name.
const NAME_EXTENSIONS: &[&str] = &[".yml", ".yaml", ".manifest"];

/// One manifest document after parsing and validation.
///
/// Only produced by [`parse_manifest`](super::parse_manifest), so the base
/// directory and output path are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    file_path: String,
    source_name: Option<String>,
    base_directory: String,
    output_path: String,
    /// Valid entries (enabled and disabled) in declaration order.
    shortcuts: Vec<Shortcut>,
    /// Outcome counts of the raw shortcut list, including dropped invalid entries.
    shortcut_counts: ValidationCounts,
}

impl Manifest {
    pub(crate) fn new(
        file_path: String,
        source_name: Option<String>,
        base_directory: String,
        output_path: String,
        shortcuts: Vec<Shortcut>,
        shortcut_counts: ValidationCounts,
    ) -> Self {
        Self {
            file_path,
            source_name: source_name.filter(|n| !n.trim().is_empty()),
            base_directory,
            output_path,
            shortcuts,
            shortcut_counts,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Declared name, or the name derived from the file path.
    pub fn name(&self) -> String {
        self.source_name
            .clone()
            .unwrap_or_else(|| fallback_name(&self.file_path))
    }

    pub fn base_directory(&self) -> &str {
        &self.base_directory
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub const fn shortcut_counts(&self) -> ValidationCounts {
        self.shortcut_counts
    }

    pub fn enabled_shortcuts(&self) -> impl Iterator<Item = &Shortcut> {
        self.shortcuts.iter().filter(|s| s.enabled)
    }

    /// Records for every enabled shortcut, in declaration order.
    pub fn export_records(&self) -> Vec<ExportRecord> {
        self.enabled_shortcuts()
            .map(|s| s.to_export_record(&self.base_directory))
            .collect()
    }
}

/// Derive a display name from a manifest path.
///
/// `games/foo.manifest.yml` becomes `foo`.
pub fn fallback_name(file_path: &str) -> String {
    let mut name = Path::new(file_path)
        .file_name()
        .map_or_else(|| file_path.to_string(), |n| n.to_string_lossy().into_owned());

    loop {
        let stripped = NAME_EXTENSIONS.iter().find_map(|ext| {
            name.strip_suffix(ext)
                .filter(|rest| !rest.is_empty())
                .map(str::to_string)
        });
        match stripped {
            Some(rest) => name = rest,
            None => return name,
        }
    }
}
