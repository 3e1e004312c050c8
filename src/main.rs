//! srm - Turn YAML shortcut manifests into Steam ROM Manager JSON.
//!
//! Provides both human-friendly and script-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::future::Future;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use srm::batch::{BatchReport, ExportOptions, collect_manifest_paths, run_batch};
use srm::cli::{CheckArgs, Cli, Commands, CompletionsArgs, ExportArgs};
use srm::config::{Settings, load_settings};
use srm::error::{Result, SrmError};
use srm::logging::init_logging;
use srm::manifest::ParseOptions;
use srm::output::{Output, OutputMode, VersionInfo};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> bool {
        option_env!("VERGEN_GIT_DIRTY") == Some("true")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        console::set_colors_enabled(false);
    }
    init_logging(cli.use_json(), cli.verbose, cli.quiet);

    let output = OutputMode::from_cli(&cli, color).into_output();

    match run(&cli, output.as_ref()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output.error(&e);
            std::process::exit(1);
        }
    }
}

/// Dispatch the command. `Ok(false)` means at least one manifest was skipped.
fn run(cli: &Cli, output: &dyn Output) -> Result<bool> {
    match &cli.command {
        None => print_quick_start(cli).map(|()| true),
        Some(Commands::Export(args)) => cmd_export(cli, args, output),
        Some(Commands::Check(args)) => cmd_check(cli, args, output),
        Some(Commands::Version) => {
            cmd_version(output);
            Ok(true)
        }
        Some(Commands::Completions(args)) => {
            cmd_completions(args);
            Ok(true)
        }
    }
}

// === Quick Start ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    commands: QuickStartCommands,
    output_modes: OutputModes,
}

#[derive(Serialize)]
struct QuickStartCommands {
    export: &'static str,
    export_dir: &'static str,
    preview: &'static str,
    check: &'static str,
    with_settings: &'static str,
}

#[derive(Serialize)]
struct OutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

const QUICK_START: QuickStartCommands = QuickStartCommands {
    export: "srm export <MANIFEST.yml>",
    export_dir: "srm export <DIR>",
    preview: "srm export <PATH> --dry-run",
    check: "srm check <PATH>",
    with_settings: "srm --config srm.toml export",
};

fn print_quick_start(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        let help = RobotQuickStart {
            tool: "srm",
            version: build_info::VERSION,
            description: "Export YAML shortcut manifests to Steam ROM Manager JSON",
            commands: QUICK_START,
            output_modes: OutputModes {
                human: "--format=text (default)",
                robot: "--robot or --format=json",
                compact: "--format=json-compact",
            },
        };
        println!("{}", serde_json::to_string_pretty(&help)?);
        return Ok(());
    }

    println!(
        "{} {} - Steam ROM Manager manifest exporter\n",
        style("srm").bold().cyan(),
        build_info::VERSION
    );
    println!("{}", style("QUICK START").bold().underlined());
    println!();
    let rows = [
        (QUICK_START.export, "Export one manifest"),
        (QUICK_START.export_dir, "Export every *.yml / *.yaml in a directory"),
        (QUICK_START.preview, "Show what would be written"),
        (QUICK_START.check, "Validate without writing"),
        (QUICK_START.with_settings, "Use a run settings file"),
    ];
    for (command, what) in rows {
        println!("  {:<32}  {what}", style(command).green());
    }
    println!();
    println!("Run {} for full help", style("srm --help").yellow());
    Ok(())
}

// === Commands ===

fn load_run_settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => load_settings(path),
        None => Ok(Settings::default()),
    }
}

/// Resolve the manifest list: explicit paths win over the settings file.
///
/// Non-manifest files found in scanned directories are reported as warnings.
fn manifest_paths(
    args: &[PathBuf],
    settings: &Settings,
    output: &dyn Output,
) -> Result<Vec<PathBuf>> {
    let inputs = if args.is_empty() {
        settings.manifests.as_slice()
    } else {
        args
    };
    let scan = collect_manifest_paths(inputs)?;
    for path in &scan.ignored {
        output.warning(&format!("Ignoring non-manifest file: {}", path.display()));
    }
    if !scan.has_manifests() {
        return Err(SrmError::NoManifests);
    }
    debug!(count = scan.manifests.len(), "Resolved manifest paths");
    Ok(scan.manifests)
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

fn run_pipeline(paths: &[PathBuf], options: &ExportOptions) -> Result<BatchReport> {
    info!(manifests = paths.len(), dry_run = options.dry_run, "Starting batch");
    block_on(run_batch(paths, options))
}

fn cmd_export(cli: &Cli, args: &ExportArgs, output: &dyn Output) -> Result<bool> {
    let settings = load_run_settings(cli)?;
    let paths = manifest_paths(&args.paths, &settings, output)?;
    let options = ExportOptions {
        parse: ParseOptions {
            warn_unknown_keys: settings.warn_unknown_keys && !args.quiet_unknown_keys,
        },
        dry_run: args.dry_run || settings.dry_run,
    };

    let report = run_pipeline(&paths, &options)?;
    output.export_report(&report);
    Ok(report.is_success())
}

fn cmd_check(cli: &Cli, args: &CheckArgs, output: &dyn Output) -> Result<bool> {
    let settings = load_run_settings(cli)?;
    let paths = manifest_paths(&args.paths, &settings, output)?;
    let options = ExportOptions {
        parse: ParseOptions {
            warn_unknown_keys: settings.warn_unknown_keys && !args.quiet_unknown_keys,
        },
        dry_run: true,
    };

    let report = run_pipeline(&paths, &options)?;
    output.check_report(&report);
    Ok(report.is_success())
}

fn cmd_version(output: &dyn Output) {
    output.version_info(&VersionInfo {
        version: build_info::VERSION,
        git_sha: build_info::git_sha(),
        git_dirty: build_info::git_dirty(),
        build_timestamp: build_info::build_timestamp(),
        rustc_version: build_info::rustc_semver(),
        target: build_info::target(),
    });
}

fn cmd_completions(args: &CompletionsArgs) {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "srm", &mut io::stdout());
}
