//! Output mode abstraction for robot and human output.

use serde::Serialize;

use crate::cli::Cli;
use crate::error::SrmError;

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

use crate::batch::BatchReport;
use crate::theme::SrmTheme;

/// Build metadata shown by `srm version`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
    pub target: &'static str,
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone)]
pub enum OutputMode {
    /// JSON output for scripts.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human(SrmTheme),
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli, color: bool) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else if color {
            Self::Human(SrmTheme::default())
        } else {
            Self::Human(SrmTheme::plain())
        }
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human(theme) => Box::new(HumanOutput::new(theme)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    fn error(&self, error: &SrmError);
    fn warning(&self, message: &str);

    fn version_info(&self, info: &VersionInfo);

    /// Result of `srm export`: one line per manifest plus a summary.
    fn export_report(&self, report: &BatchReport);

    /// Result of `srm check`: verdicts and every diagnostic.
    fn check_report(&self, report: &BatchReport);
}
