//! The per-manifest loop: read, parse, export, report.
//!
//! Manifests are processed one after another. A failure in one manifest is
//! recorded in its outcome and never stops the others.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::Value;
use tracing::{error, info, instrument, warn};

use crate::error::{Result, SrmError};
use crate::export::{WriteResult, write_manifest};
use crate::manifest::{Diagnostic, ParseOptions, ParsedManifest, ValidationReport, parse_manifest};

/// Options for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub parse: ParseOptions,
    /// Build every report but write nothing.
    pub dry_run: bool,
}

/// Where a manifest failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Read,
    Parse,
    Write,
}

/// What happened to one manifest.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestOutcome {
    /// Parsed and exported (or previewed, in a dry run).
    Exported {
        report: ValidationReport,
        diagnostics: Vec<Diagnostic>,
        result: WriteResult,
    },
    /// Skipped entirely.
    Failed {
        path: String,
        stage: Stage,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        report: Option<ValidationReport>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        diagnostics: Vec<Diagnostic>,
    },
}

impl ManifestOutcome {
    fn failed(path: &Path, stage: Stage, error: &SrmError, parsed: Option<ParsedManifest>) -> Self {
        let (report, diagnostics) =
            parsed.map_or((None, Vec::new()), |p| (Some(p.report), p.diagnostics));
        Self::Failed {
            path: path.display().to_string(),
            stage,
            error: error.to_string(),
            suggestion: error.suggestion(),
            report,
            diagnostics,
        }
    }

    pub const fn is_exported(&self) -> bool {
        matches!(self, Self::Exported { .. })
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub dry_run: bool,
    pub outcomes: Vec<ManifestOutcome>,
    /// Manifests that produced a result.
    pub exported: usize,
    /// Manifests skipped entirely.
    pub failed: usize,
    /// Output files actually written.
    pub written: usize,
    /// Shortcut records across all exported manifests.
    pub shortcuts: usize,
}

impl BatchReport {
    fn push(&mut self, outcome: ManifestOutcome) {
        match &outcome {
            ManifestOutcome::Exported { result, .. } => {
                self.exported += 1;
                self.shortcuts += result.stats.ok;
                if result.written {
                    self.written += 1;
                }
            }
            ManifestOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Exported manifests with at least one record, written or not.
    pub fn with_output(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ManifestOutcome::Exported { result, .. } if result.stats.ok > 0))
            .count()
    }

    pub const fn total(&self) -> usize {
        self.exported + self.failed
    }

    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Read and parse a manifest file into a generic YAML tree.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_manifest_document(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SrmError::ManifestNotFound {
                path: path.display().to_string(),
            }
        } else {
            SrmError::ManifestRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| SrmError::YamlParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Run one manifest through the whole pipeline.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn process_manifest(path: &Path, options: &ExportOptions) -> ManifestOutcome {
    let document = match load_manifest_document(path).await {
        Ok(document) => document,
        Err(e) => {
            error!(error = %e, "Skipping manifest");
            return ManifestOutcome::failed(path, Stage::Read, &e, None);
        }
    };

    let parsed = match parse_manifest(&path.to_string_lossy(), &document, &options.parse) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!(error = %e, "Skipping manifest");
            return ManifestOutcome::failed(path, Stage::Parse, &e, None);
        }
    };

    let result = if options.dry_run {
        Ok(WriteResult::preview(&parsed.manifest))
    } else {
        write_manifest(&parsed.manifest).await
    };

    match result {
        Ok(result) => ManifestOutcome::Exported {
            report: parsed.report,
            diagnostics: parsed.diagnostics,
            result,
        },
        Err(e) => {
            error!(error = %e, "Export failed");
            ManifestOutcome::failed(path, Stage::Write, &e, Some(parsed))
        }
    }
}

/// Process every manifest in order.
#[instrument(skip_all, fields(count = paths.len(), dry_run = options.dry_run))]
pub async fn run_batch(paths: &[PathBuf], options: &ExportOptions) -> BatchReport {
    let mut report = BatchReport {
        dry_run: options.dry_run,
        ..BatchReport::default()
    };

    for path in paths {
        report.push(process_manifest(path, options).await);
    }

    if report.is_success() {
        info!(
            manifests = report.total(),
            written = report.written,
            shortcuts = report.shortcuts,
            "Batch complete"
        );
    } else {
        warn!(
            manifests = report.total(),
            failed = report.failed,
            "Batch complete with skipped manifests"
        );
    }
    report
}
