//! Builds a [`Manifest`] from a parsed YAML document.

use serde::Serialize;
use serde_yaml::Value;
use tracing::{debug, info, instrument, trace, warn};

use super::ParseOptions;
use super::alias::{AliasTable, manifest_keys};
use super::model::Manifest;
use super::shortcut::{key_label, parse_shortcut, value_kind};
use super::validation::{Diagnostic, ShortcutOutcome, ValidationReport};
use crate::error::{Result, SrmError};

/// A manifest together with everything noticed while building it.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedManifest {
    pub manifest: Manifest,
    pub report: ValidationReport,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read a string field, warning when it has another type.
///
/// A wrong-typed value never replaces one already stored for the same key.
fn string_field(value: &Value, key: &str, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            diagnostics.push(Diagnostic::warning(
                key,
                format!("expected a string, found {}", value_kind(other)),
            ));
            None
        }
    }
}

/// Parse and validate one manifest document.
///
/// Fails only when the document is not a mapping or when `baseDirectory` or
/// `outputPath` is missing or blank. Every other problem becomes a
/// diagnostic, and invalid shortcut entries are counted and dropped.
#[instrument(skip(document, options), fields(path = %file_path))]
pub fn parse_manifest(
    file_path: &str,
    document: &Value,
    options: &ParseOptions,
) -> Result<ParsedManifest> {
    let Value::Mapping(map) = document else {
        return Err(SrmError::NotAMapping {
            path: file_path.to_string(),
            found: value_kind(document).to_string(),
        });
    };

    let table = AliasTable::manifest();
    let mut diagnostics = Vec::new();
    let mut source_name = None;
    let mut base_directory = None;
    let mut output_path = None;
    let mut shortcuts = Vec::new();
    let mut outcomes = Vec::new();

    for (raw_key, value) in map {
        let Some(key) = raw_key.as_str() else {
            if options.warn_unknown_keys {
                diagnostics.push(Diagnostic::warning(
                    key_label(raw_key),
                    "ignoring non-string key",
                ));
            }
            continue;
        };

        let resolved = table.resolve(key);
        trace!(given = resolved.given_key, resolved = resolved.resolved_key, "Manifest key");

        match resolved.resolved_key {
            manifest_keys::SOURCE_NAME => {
                if let Some(v) = string_field(value, key, &mut diagnostics) {
                    source_name = Some(v);
                }
            }
            manifest_keys::BASE_DIRECTORY => {
                if let Some(v) = string_field(value, key, &mut diagnostics) {
                    base_directory = Some(v);
                }
            }
            manifest_keys::OUTPUT_PATH => {
                if let Some(v) = string_field(value, key, &mut diagnostics) {
                    output_path = Some(v);
                }
            }
            manifest_keys::SHORTCUTS => {
                let Value::Sequence(entries) = value else {
                    diagnostics.push(Diagnostic::warning(
                        key,
                        format!("expected a list, found {}", value_kind(value)),
                    ));
                    continue;
                };
                // A repeated shortcuts key replaces the earlier list.
                shortcuts.clear();
                outcomes.clear();
                for (index, entry) in entries.iter().enumerate() {
                    let parsed = parse_shortcut(entry, &format!("{key}[{index}]"), options);
                    outcomes.push(parsed.outcome);
                    diagnostics.extend(parsed.diagnostics);
                    if let Some(shortcut) = parsed.shortcut {
                        shortcuts.push(shortcut);
                    }
                }
            }
            _ => {
                if options.warn_unknown_keys {
                    diagnostics.push(Diagnostic::warning(key, "unknown key ignored"));
                }
            }
        }
    }

    let base_directory = require(base_directory, manifest_keys::BASE_DIRECTORY, file_path)?;
    let output_path = require(output_path, manifest_keys::OUTPUT_PATH, file_path)?;

    let report = ValidationReport::from_outcomes(&outcomes);
    debug_assert_eq!(
        shortcuts.len(),
        outcomes
            .iter()
            .filter(|o| **o != ShortcutOutcome::Invalid)
            .count()
    );

    for diagnostic in &diagnostics {
        debug!(field = %diagnostic.field, severity = ?diagnostic.severity, "{}", diagnostic.message);
    }

    let manifest = Manifest::new(
        file_path.to_string(),
        source_name,
        base_directory,
        output_path,
        shortcuts,
        report.counts,
    );

    if report.counts.invalid > 0 {
        warn!(
            manifest = %manifest.name(),
            invalid = report.counts.invalid,
            total = report.counts.total,
            "Dropped invalid shortcuts"
        );
    }
    info!(
        manifest = %manifest.name(),
        total = report.counts.total,
        ok = report.counts.ok,
        disabled = report.counts.disabled,
        invalid = report.counts.invalid,
        verdict = report.verdict.message(),
        "Manifest parsed"
    );

    Ok(ParsedManifest {
        manifest,
        report,
        diagnostics,
    })
}

fn require(value: Option<String>, field: &'static str, file_path: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(SrmError::MissingField {
            field,
            path: file_path.to_string(),
        }),
    }
}
