//! Human-mode output.

use crate::common::cli::CliRunner;
use crate::common::fixtures::{ALL_DISABLED, MIXED_SHORTCUTS, ManifestDir};

#[test]
fn export_reports_fraction_and_summary() {
    let dir = ManifestDir::new();
    let path = dir.manifest("m.yml", "m.json", MIXED_SHORTCUTS);
    let path = path.to_string_lossy();

    let result = CliRunner::new().run(&["export", &path]);
    result
        .assert_success()
        .assert_stdout_contains("[WARN] m -> ")
        .assert_stdout_contains("wrote 1/3 shortcuts")
        .assert_stdout_contains("1 manifests: 1 written, 0 skipped, 1 shortcuts");
    assert!(!result.stdout.contains('\u{1b}'), "piped output must not be colored");
}

#[test]
fn all_disabled_is_a_note_not_a_failure() {
    let dir = ManifestDir::new();
    let path = dir.manifest("off.yml", "off.json", ALL_DISABLED);
    let path = path.to_string_lossy();

    CliRunner::new()
        .run(&["export", &path])
        .assert_success()
        .assert_stdout_contains("[NOTE]")
        .assert_stdout_contains("nothing to write");
}

#[test]
fn check_shows_warnings() {
    let dir = ManifestDir::new();
    let path = dir.manifest("m.yml", "m.json", "  - {title: A, target: a.exe, icon: a.png}\n");
    let path = path.to_string_lossy();

    CliRunner::new()
        .run(&["check", &path])
        .assert_success()
        .assert_stdout_contains("would write 1/1")
        .assert_stdout_contains("shortcuts[0].icon: unknown key ignored");
    assert!(!dir.output("m.json").exists());
}

#[test]
fn directory_export_warns_about_ignored_files() {
    let dir = ManifestDir::new();
    dir.manifest("m.yml", "m.json", MIXED_SHORTCUTS);
    let notes = dir.write("notes.txt", "not a manifest\n");
    let root = dir.path().to_string_lossy();

    let result = CliRunner::new().run(&["export", &root]);
    result
        .assert_success()
        .assert_stderr_contains("Ignoring non-manifest file")
        .assert_stderr_contains(&notes.display().to_string());
    assert!(dir.output("m.json").exists());
}

#[test]
fn settings_file_supplies_manifests() {
    let dir = ManifestDir::new();
    dir.manifest("m.yml", "m.json", MIXED_SHORTCUTS);
    let config = dir.write("srm.toml", "manifests = [\"m.yml\"]\n");
    let config = config.to_string_lossy();

    CliRunner::new()
        .run(&["--config", &config, "export"])
        .assert_success();
    assert!(dir.output("m.json").exists());
}

#[test]
fn missing_settings_file_gives_hint() {
    CliRunner::new()
        .run(&["--config", "/nonexistent/srm.toml", "export"])
        .assert_exit_code(1)
        .assert_stderr_contains("Configuration file not found")
        .assert_stderr_contains("hint:");
}
