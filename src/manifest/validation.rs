//! Classification of shortcut parse outcomes and field-level diagnostics.

use std::fmt;

use serde::Serialize;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The manifest or shortcut could not be used.
    Error,
    /// Something was ignored or defaulted.
    Warning,
}

/// A single problem found while parsing a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Location, e.g. `outputPath` or `shortcuts[2].title`.
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    #[must_use]
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// How one raw shortcut entry was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutOutcome {
    /// Valid and enabled.
    Ok,
    /// Valid but disabled.
    Disabled,
    /// Malformed; no shortcut was built.
    Invalid,
}

/// Counts for one manifest's shortcut list.
///
/// `ok + disabled + invalid == total` always holds because the counts are
/// only ever built from a list of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationCounts {
    pub total: usize,
    pub ok: usize,
    pub disabled: usize,
    pub invalid: usize,
}

impl ValidationCounts {
    /// Tally a batch of outcomes.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a ShortcutOutcome>,
    {
        outcomes
            .into_iter()
            .fold(Self::default(), |mut counts, outcome| {
                counts.total += 1;
                match outcome {
                    ShortcutOutcome::Ok => counts.ok += 1,
                    ShortcutOutcome::Disabled => counts.disabled += 1,
                    ShortcutOutcome::Invalid => counts.invalid += 1,
                }
                counts
            })
    }

    /// Entries that will not be exported.
    pub const fn skipped(&self) -> usize {
        self.disabled + self.invalid
    }

    /// Derive the verdict for these counts.
    pub const fn verdict(&self) -> Verdict {
        if self.total == 0 {
            Verdict::NothingToLoad
        } else if self.invalid == self.total {
            Verdict::AllInvalid
        } else if self.disabled == self.total {
            Verdict::AllDisabled
        } else if self.ok == self.total {
            Verdict::AllLoaded
        } else {
            Verdict::Partial
        }
    }
}

/// Overall result level of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictLevel {
    Pass,
    PassWithNote,
    Warn,
    Fail,
}

/// Classification of a whole shortcut batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NothingToLoad,
    AllLoaded,
    AllDisabled,
    AllInvalid,
    /// Mixed outcomes. Invalid and disabled counts stay separate.
    Partial,
}

impl Verdict {
    pub const fn level(self) -> VerdictLevel {
        match self {
            Self::NothingToLoad | Self::AllLoaded => VerdictLevel::Pass,
            Self::AllDisabled => VerdictLevel::PassWithNote,
            Self::Partial => VerdictLevel::Warn,
            Self::AllInvalid => VerdictLevel::Fail,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::NothingToLoad => "nothing to load",
            Self::AllLoaded => "all loaded",
            Self::AllDisabled => "all disabled",
            Self::AllInvalid => "all shortcuts invalid",
            Self::Partial => "partial",
        }
    }
}

/// Counts plus verdict for one manifest's shortcut list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    #[serde(flatten)]
    pub counts: ValidationCounts,
    pub skipped: usize,
    pub verdict: Verdict,
    pub level: VerdictLevel,
}

impl ValidationReport {
    pub fn from_counts(counts: ValidationCounts) -> Self {
        let verdict = counts.verdict();
        Self {
            counts,
            skipped: counts.skipped(),
            verdict,
            level: verdict.level(),
        }
    }

    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a ShortcutOutcome>,
    {
        Self::from_counts(ValidationCounts::from_outcomes(outcomes))
    }
}
