//! CLI argument definitions and command dispatch.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// srm - Turn YAML shortcut manifests into Steam ROM Manager JSON.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "srm", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "SRM_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (repeat for more: -v, -vv, -vvv)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run settings file (YAML or TOML)
    #[arg(long, short = 'c', global = true, env = "SRM_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export manifests to Steam ROM Manager JSON files
    Export(ExportArgs),

    /// Parse and validate manifests without writing anything
    #[command(visible_alias = "validate")]
    Check(CheckArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for `srm export`.
///
/// # Examples
///
/// ```bash
/// # Export one manifest
/// srm export ~/manifests/emulators.yml
///
/// # Export every *.yml / *.yaml in a directory
/// srm export ~/manifests/
///
/// # Preview what would be written
/// srm export ~/manifests/ --dry-run
/// ```
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Manifest files or directories (default: the settings file's list)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Dry run - report what would be written without writing
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Do not warn about unrecognized keys
    #[arg(long)]
    pub quiet_unknown_keys: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Manifest files or directories (default: the settings file's list)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Do not warn about unrecognized keys
    #[arg(long)]
    pub quiet_unknown_keys: bool,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
