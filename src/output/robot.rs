//! Robot mode JSON output implementation.

use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, instrument, trace};

use crate::batch::BatchReport;
use crate::error::SrmError;

use super::{Output, RobotFormat, VersionInfo};

/// JSON output implementation for scripts and CI.
///
/// Each command writes exactly one document to stdout. Errors and warnings
/// go to stderr so stdout always parses as a single JSON value.
pub struct RobotOutput {
    format: RobotFormat,
}

/// Wraps a batch report with the command that produced it.
#[derive(Serialize)]
struct CommandReport<'a> {
    command: &'static str,
    success: bool,
    #[serde(flatten)]
    report: &'a BatchReport,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Serialize according to the configured format.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> serde_json::Result<String> {
        match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        }
    }

    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        match self.render(data) {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                println!("{json}");
            }
            Err(e) => error!(error = %e, "Failed to serialize robot output"),
        }
    }

    /// Errors go to stderr pretty-printed; warnings as single lines.
    fn output_json_stderr<T: Serialize>(&self, data: &T, pretty: bool) {
        let json = if pretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };
        match json {
            Ok(json) => eprintln!("{json}"),
            Err(e) => error!(error = %e, "Failed to serialize robot diagnostic"),
        }
    }

    fn command_report<'a>(command: &'static str, report: &'a BatchReport) -> CommandReport<'a> {
        CommandReport {
            command,
            success: report.is_success(),
            report,
        }
    }
}

/// JSON document describing an error.
pub fn error_document(error: &SrmError) -> serde_json::Value {
    json!({
        "error": true,
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "recoverable": error.is_user_recoverable(),
    })
}

/// JSON document describing a warning.
pub fn warning_document(message: &str) -> serde_json::Value {
    json!({
        "warning": true,
        "message": message,
    })
}

impl Output for RobotOutput {
    #[instrument(skip(self))]
    fn error(&self, error: &SrmError) {
        debug!(error = %error, "Robot: error");
        self.output_json_stderr(&error_document(error), true);
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
        self.output_json_stderr(&warning_document(message), false);
    }

    fn version_info(&self, info: &VersionInfo) {
        self.output_json(info);
    }

    #[instrument(skip_all, fields(manifests = report.total()))]
    fn export_report(&self, report: &BatchReport) {
        self.output_json(&Self::command_report("export", report));
    }

    #[instrument(skip_all, fields(manifests = report.total()))]
    fn check_report(&self, report: &BatchReport) {
        self.output_json(&Self::command_report("check", report));
    }
}
