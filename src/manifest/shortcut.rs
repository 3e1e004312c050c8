//! Shortcut entries: the validated model and the parser that builds it.

use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::expand_home;

use super::ParseOptions;
use super::alias::{AliasTable, shortcut_keys};
use super::validation::{Diagnostic, ShortcutOutcome};

/// Hard failure while building a [`Shortcut`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("shortcut title is empty")]
    EmptyTitle,
}

/// One launchable entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub title: String,
    /// Relative to the manifest's base directory unless absolute.
    pub target: String,
    pub enabled: bool,
}

/// The JSON record written for one shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub title: String,
    pub target: String,
}

impl Shortcut {
    /// Build a shortcut. The title is trimmed and must not be empty.
    pub fn new(
        title: impl Into<String>,
        target: impl Into<String>,
        enabled: bool,
    ) -> Result<Self, ShortcutError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ShortcutError::EmptyTitle);
        }
        Ok(Self {
            title,
            target: target.into(),
            enabled,
        })
    }

    /// Resolve the target against `base_directory`.
    ///
    /// A leading `~` is expanded in both paths, the same way as for
    /// `outputPath`. Absolute targets are returned verbatim.
    pub fn resolve_full_path(&self, base_directory: &str) -> String {
        let target = expand_home(Path::new(&self.target));
        if target.is_absolute() {
            return target.to_string_lossy().into_owned();
        }
        expand_home(Path::new(base_directory))
            .join(target)
            .to_string_lossy()
            .into_owned()
    }

    /// Project into the exported `{ title, target }` shape.
    pub fn to_export_record(&self, base_directory: &str) -> ExportRecord {
        ExportRecord {
            title: self.title.clone(),
            target: self.resolve_full_path(base_directory),
        }
    }
}

/// Result of parsing one raw shortcut entry.
#[derive(Debug, Clone)]
pub struct ParsedShortcut {
    /// Present unless the entry was invalid.
    pub shortcut: Option<Shortcut>,
    pub outcome: ShortcutOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedShortcut {
    fn invalid(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            shortcut: None,
            outcome: ShortcutOutcome::Invalid,
            diagnostics,
        }
    }
}

/// Short human name for a YAML value's type.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a mapping key for diagnostics; non-string keys are shown as YAML.
pub(crate) fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| value_kind(other).to_string()),
    }
}

/// Parse one raw entry from a manifest's shortcut list.
///
/// `location` prefixes every diagnostic field, e.g. `shortcuts[3]`.
///
/// Wrong-typed fields and unknown keys only produce warnings. The entry is
/// invalid when it has no usable title or target, or when the title is blank.
/// When both `enabled` and `disabled` are given, `disabled` decides.
pub fn parse_shortcut(raw: &Value, location: &str, options: &ParseOptions) -> ParsedShortcut {
    let field = |name: &str| format!("{location}.{name}");
    let mut diagnostics = Vec::new();

    let Value::Mapping(map) = raw else {
        diagnostics.push(Diagnostic::error(
            location,
            format!("expected a mapping, found {}", value_kind(raw)),
        ));
        return ParsedShortcut::invalid(diagnostics);
    };

    let table = AliasTable::shortcut();
    let mut title: Option<String> = None;
    let mut target: Option<String> = None;
    let mut enabled: Option<bool> = None;
    let mut disabled: Option<bool> = None;

    for (raw_key, value) in map {
        let Some(key) = raw_key.as_str() else {
            if options.warn_unknown_keys {
                diagnostics.push(Diagnostic::warning(
                    location,
                    format!("ignoring non-string key '{}'", key_label(raw_key)),
                ));
            }
            continue;
        };

        let resolved = table.resolve(key);
        trace!(given = resolved.given_key, resolved = resolved.resolved_key, "Shortcut key");

        match resolved.resolved_key {
            shortcut_keys::TITLE | shortcut_keys::TARGET => {
                let slot = if resolved.resolved_key == shortcut_keys::TITLE {
                    &mut title
                } else {
                    &mut target
                };
                match value {
                    Value::String(s) => *slot = Some(s.clone()),
                    other => diagnostics.push(Diagnostic::warning(
                        field(key),
                        format!("expected a string, found {}", value_kind(other)),
                    )),
                }
            }
            shortcut_keys::ENABLED | shortcut_keys::DISABLED => {
                let slot = if resolved.resolved_key == shortcut_keys::ENABLED {
                    &mut enabled
                } else {
                    &mut disabled
                };
                match value {
                    Value::Bool(b) => *slot = Some(*b),
                    other => diagnostics.push(Diagnostic::warning(
                        field(key),
                        format!("expected true or false, found {}", value_kind(other)),
                    )),
                }
            }
            _ => {
                if options.warn_unknown_keys {
                    diagnostics.push(Diagnostic::warning(field(key), "unknown key ignored"));
                }
            }
        }
    }

    let is_enabled = match (enabled, disabled) {
        (Some(on), Some(off)) => {
            if on == off {
                diagnostics.push(Diagnostic::warning(
                    location,
                    format!("both enabled: {on} and disabled: {off} given; using disabled: {off}"),
                ));
            }
            !off
        }
        (_, Some(off)) => !off,
        (Some(on), None) => on,
        (None, None) => true,
    };

    let Some(title) = title else {
        diagnostics.push(Diagnostic::error(field(shortcut_keys::TITLE), "missing title"));
        return ParsedShortcut::invalid(diagnostics);
    };

    let target = match target {
        Some(t) if !t.trim().is_empty() => t,
        Some(_) => {
            diagnostics.push(Diagnostic::error(field(shortcut_keys::TARGET), "target is empty"));
            return ParsedShortcut::invalid(diagnostics);
        }
        None => {
            diagnostics.push(Diagnostic::error(field(shortcut_keys::TARGET), "missing target"));
            return ParsedShortcut::invalid(diagnostics);
        }
    };

    match Shortcut::new(title, target, is_enabled) {
        Ok(shortcut) => {
            let outcome = if shortcut.enabled {
                ShortcutOutcome::Ok
            } else {
                ShortcutOutcome::Disabled
            };
            debug!(title = %shortcut.title, ?outcome, "Parsed shortcut");
            ParsedShortcut {
                shortcut: Some(shortcut),
                outcome,
                diagnostics,
            }
        }
        Err(e) => {
            diagnostics.push(Diagnostic::error(field(shortcut_keys::TITLE), e.to_string()));
            ParsedShortcut::invalid(diagnostics)
        }
    }
}
