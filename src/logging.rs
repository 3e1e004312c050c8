//! Structured logging initialization for the srm CLI.
//!
//! Logs always go to stderr so stdout stays clean for reports and JSON.

use std::io::{self, IsTerminal};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON lines, for robot mode.
    Json,
    /// Colored multi-field output on a terminal.
    Pretty,
    /// Plain single-line output when stderr is piped.
    Compact,
}

impl LogFormat {
    /// Robot mode always gets JSON; otherwise it depends on whether stderr is a TTY.
    pub const fn select(robot_mode: bool, stderr_is_tty: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if stderr_is_tty {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Build the default filter directive for the given verbosity.
///
/// `quiet` wins over `verbose`.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "srm=error"
    } else {
        match verbose {
            0 => "srm=warn",
            1 => "srm=info",
            2 => "srm=debug",
            _ => "srm=trace",
        }
    }
}

/// Initialize the tracing subscriber based on CLI flags and environment.
///
/// # Arguments
///
/// * `robot_mode` - If true, output structured JSON logs for machine consumption
/// * `verbose` - Verbosity level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
/// * `quiet` - If true, only errors are logged
///
/// `RUST_LOG` overrides the level chosen from the flags.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));
    let registry = tracing_subscriber::registry().with(filter);

    let layer = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    match LogFormat::select(robot_mode, io::stderr().is_terminal()) {
        LogFormat::Json => registry.with(layer.json().with_target(true)).init(),
        LogFormat::Pretty => registry.with(layer.with_target(false)).init(),
        LogFormat::Compact => registry
            .with(layer.with_ansi(false).with_target(false).compact())
            .init(),
    }
}
