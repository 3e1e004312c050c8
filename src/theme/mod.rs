//! Theme system for human-mode output.

use console::Style;

use crate::manifest::{Severity, VerdictLevel};

/// Visual theme for srm human-mode output.
///
/// Centralizes colors and styles for consistent rendering.
#[derive(Debug, Clone)]
pub struct SrmTheme {
    pub accent: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub muted: Style,

    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub path: Style,
}

impl Default for SrmTheme {
    fn default() -> Self {
        Self {
            accent: Style::new().blue().bright(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warning: Style::new().yellow().bold(),
            muted: Style::new().dim(),
            header: Style::new().bold().blue().bright(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            path: Style::new().italic().cyan(),
        }
    }
}

impl SrmTheme {
    /// A theme that never emits color codes.
    pub fn plain() -> Self {
        let plain = Style::new().force_styling(false);
        Self {
            accent: plain.clone(),
            success: plain.clone(),
            error: plain.clone(),
            warning: plain.clone(),
            muted: plain.clone(),
            header: plain.clone(),
            label: plain.clone(),
            value: plain.clone(),
            path: plain,
        }
    }

    /// Style for a verdict badge.
    pub fn for_level(&self, level: VerdictLevel) -> &Style {
        match level {
            VerdictLevel::Pass => &self.success,
            VerdictLevel::PassWithNote => &self.accent,
            VerdictLevel::Warn => &self.warning,
            VerdictLevel::Fail => &self.error,
        }
    }

    /// Style for a diagnostic marker.
    pub fn for_severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
        }
    }
}
