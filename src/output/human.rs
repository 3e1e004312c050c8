//! Human-friendly output implementation using `console` styling.

use std::fmt::Write as _;

use tracing::{debug, instrument};

use crate::batch::{BatchReport, ManifestOutcome};
use crate::error::SrmError;
use crate::export::WriteResult;
use crate::manifest::{Diagnostic, ValidationReport, Verdict};
use crate::theme::SrmTheme;

use super::{Output, VersionInfo};

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    theme: SrmTheme,
}

impl HumanOutput {
    #[instrument(skip(theme))]
    pub fn new(theme: SrmTheme) -> Self {
        debug!("Creating HumanOutput");
        Self { theme }
    }

    fn badge(&self, report: &ValidationReport) -> String {
        let text = match report.verdict {
            Verdict::NothingToLoad | Verdict::AllLoaded => "[OK]",
            Verdict::AllDisabled => "[NOTE]",
            Verdict::Partial => "[WARN]",
            Verdict::AllInvalid => "[FAIL]",
        };
        self.theme.for_level(report.level).apply_to(text).to_string()
    }

    fn counts_detail(report: &ValidationReport) -> String {
        let c = report.counts;
        let mut parts = Vec::new();
        if c.disabled > 0 {
            parts.push(format!("{} disabled", c.disabled));
        }
        if c.invalid > 0 {
            parts.push(format!("{} invalid", c.invalid));
        }
        if parts.is_empty() {
            report.verdict.message().to_string()
        } else {
            format!("{}: {}", report.verdict.message(), parts.join(", "))
        }
    }

    fn write_line(&self, result: &WriteResult, dry_run: bool) -> String {
        let stats = result.stats;
        let action = if stats.ok == 0 {
            "nothing to write".to_string()
        } else if dry_run {
            format!("would write {}/{} shortcuts", stats.ok, stats.total)
        } else {
            format!("wrote {}/{} shortcuts", stats.ok, stats.total)
        };
        format!(
            "{} {} {}  {action}",
            self.theme.value.apply_to(&result.manifest_name),
            self.theme.muted.apply_to("->"),
            self.theme.path.apply_to(result.output_path.display()),
        )
    }

    fn diagnostic_line(&self, diagnostic: &Diagnostic) -> String {
        let marker = if diagnostic.is_error() { "error" } else { "warn" };
        format!(
            "      {} {}",
            self.theme.for_severity(diagnostic.severity).apply_to(marker),
            diagnostic
        )
    }

    /// Render one manifest outcome.
    pub fn render_outcome(&self, outcome: &ManifestOutcome, dry_run: bool, all_diagnostics: bool) -> String {
        let mut out = String::new();
        match outcome {
            ManifestOutcome::Exported {
                report,
                diagnostics,
                result,
            } => {
                let _ = writeln!(
                    out,
                    "{} {} ({})",
                    self.badge(report),
                    self.write_line(result, dry_run),
                    Self::counts_detail(report)
                );
                let shown = diagnostics.iter().filter(|d| all_diagnostics || d.is_error());
                for diagnostic in shown {
                    let _ = writeln!(out, "{}", self.diagnostic_line(diagnostic));
                }
            }
            ManifestOutcome::Failed {
                path,
                error,
                suggestion,
                diagnostics,
                ..
            } => {
                let _ = writeln!(
                    out,
                    "{} {}: {}",
                    self.theme.error.apply_to("[SKIP]"),
                    self.theme.path.apply_to(path),
                    error
                );
                if let Some(hint) = suggestion {
                    let _ = writeln!(out, "      {} {hint}", self.theme.label.apply_to("hint:"));
                }
                if all_diagnostics {
                    for diagnostic in diagnostics {
                        let _ = writeln!(out, "{}", self.diagnostic_line(diagnostic));
                    }
                }
            }
        }
        out
    }

    /// Render the closing summary line.
    pub fn render_summary(&self, report: &BatchReport) -> String {
        let verb = if report.dry_run { "would write" } else { "written" };
        let line = format!(
            "{} manifests: {} {verb}, {} skipped, {} shortcuts",
            report.total(),
            report.with_output(),
            report.failed,
            report.shortcuts
        );
        if report.is_success() {
            self.theme.success.apply_to(line).to_string()
        } else {
            self.theme.warning.apply_to(line).to_string()
        }
    }
}

impl Output for HumanOutput {
    #[instrument(skip(self))]
    fn error(&self, error: &SrmError) {
        debug!(error = %error, recoverable = error.is_user_recoverable(), "Outputting error");
        eprintln!("{} {error}", self.theme.error.apply_to("[ERR]"));
        if let Some(suggestion) = error.suggestion() {
            eprintln!("      {} {suggestion}", self.theme.label.apply_to("hint:"));
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        eprintln!("{} {message}", self.theme.warning.apply_to("[WARN]"));
    }

    fn version_info(&self, info: &VersionInfo) {
        let label = |name: &str| format!("{}", self.theme.label.apply_to(format!("{name:<10}")));
        println!("{}", self.theme.header.apply_to("srm"));
        println!("  {}{}", label("Version"), self.theme.value.apply_to(info.version));
        let dirty = if info.git_dirty { " (dirty)" } else { "" };
        println!("  {}{}{dirty}", label("Git SHA"), info.git_sha);
        println!("  {}{}", label("Built"), info.build_timestamp);
        println!("  {}{}", label("Rust"), info.rustc_version);
        println!("  {}{}", label("Target"), info.target);
    }

    #[instrument(skip_all, fields(manifests = report.total()))]
    fn export_report(&self, report: &BatchReport) {
        for outcome in &report.outcomes {
            print!("{}", self.render_outcome(outcome, report.dry_run, false));
        }
        println!("{}", self.render_summary(report));
    }

    #[instrument(skip_all, fields(manifests = report.total()))]
    fn check_report(&self, report: &BatchReport) {
        for outcome in &report.outcomes {
            print!("{}", self.render_outcome(outcome, true, true));
        }
        println!("{}", self.render_summary(report));
    }
}
