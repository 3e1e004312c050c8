//! Manifest files through parse, export, and batch reporting.

use std::path::Path;

use serde_json::json;

use srm::batch::{ExportOptions, ManifestOutcome, Stage, process_manifest, run_batch};
use srm::error::SrmError;
use srm::export::write_manifest;
use srm::manifest::{ParseOptions, Verdict, VerdictLevel, parse_manifest};

use crate::common::fixtures::{ALL_DISABLED, MIXED_SHORTCUTS, ManifestDir};
use crate::common::init_test_logging;

fn parse_yaml(path: &str, yaml: &str) -> srm::error::Result<srm::manifest::ParsedManifest> {
    let doc: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    parse_manifest(path, &doc, &ParseOptions::default())
}

#[tokio::test]
async fn mixed_manifest_exports_only_enabled_valid_entries() {
    init_test_logging();
    let dir = ManifestDir::new();
    let path = dir.manifest("mixed.yml", "mixed.json", MIXED_SHORTCUTS);

    let outcome = process_manifest(&path, &ExportOptions::default()).await;
    let ManifestOutcome::Exported { report, result, .. } = outcome else {
        panic!("expected export, got {outcome:?}");
    };

    assert_eq!(report.counts.total, 3);
    assert_eq!(report.counts.ok, 1);
    assert_eq!(report.counts.disabled, 1);
    assert_eq!(report.counts.invalid, 1);
    assert_eq!(report.verdict, Verdict::Partial);
    assert_eq!(report.level, VerdictLevel::Warn);

    assert!(result.written);
    assert_eq!(result.stats.ok, 1);
    assert_eq!(
        dir.read_json("mixed.json"),
        json!([{ "title": "A", "target": "/games/a.exe" }])
    );
}

#[tokio::test]
async fn all_disabled_writes_nothing() {
    let dir = ManifestDir::new();
    let path = dir.manifest("off.yml", "off.json", ALL_DISABLED);

    let outcome = process_manifest(&path, &ExportOptions::default()).await;
    let ManifestOutcome::Exported { report, result, .. } = outcome else {
        panic!("expected export, got {outcome:?}");
    };

    assert_eq!(report.verdict, Verdict::AllDisabled);
    assert_eq!(result.stats.total, 3);
    assert_eq!(result.stats.enabled, 0);
    assert_eq!(result.stats.disabled, 3);
    assert_eq!(result.stats.ok, 0);
    assert!(!result.written);
    assert!(!dir.output("off.json").exists());
}

#[test]
fn missing_base_directory_names_the_field() {
    let err = parse_yaml("x.yml", "sourceName: X\noutputPath: /out.json\n").unwrap_err();
    assert!(matches!(
        err,
        SrmError::MissingField {
            field: "baseDirectory",
            ..
        }
    ));
    assert!(err.to_string().contains("baseDirectory"));
    assert!(err.to_string().contains("x.yml"));
}

#[test]
fn aliases_work_across_both_sections() {
    let parsed = parse_yaml(
        "/m/emulators.manifest.yml",
        "rootDirectory: /emu\noutputFile: /out.json\ntitles:\n  - {name: Dolphin, exec: dolphin/dolphin.exe}\n  - {name: Cemu, exec: /opt/cemu, disable: true}\n",
    )
    .unwrap();

    let manifest = &parsed.manifest;
    assert_eq!(manifest.name(), "emulators");
    assert_eq!(manifest.base_directory(), "/emu");
    assert_eq!(manifest.shortcuts().len(), 2);

    let records = manifest.export_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Dolphin");
    assert_eq!(records[0].target, "/emu/dolphin/dolphin.exe");
}

#[test]
fn absolute_target_is_kept_verbatim() {
    let parsed = parse_yaml(
        "m.yml",
        "root: /root\noutput: /o.json\nentries:\n  - {title: G, target: game.exe}\n  - {title: H, target: /abs/game.exe}\n",
    )
    .unwrap();
    let targets: Vec<_> = parsed
        .manifest
        .export_records()
        .into_iter()
        .map(|r| r.target)
        .collect();
    assert_eq!(targets, ["/root/game.exe", "/abs/game.exe"]);
}

#[tokio::test]
async fn export_is_byte_identical_on_rerun() {
    let dir = ManifestDir::new();
    let path = dir.manifest(
        "m.yml",
        "m.json",
        "  - {title: Z, target: z.exe}\n  - {title: A, target: a.exe}\n",
    );
    let text = std::fs::read_to_string(&path).unwrap();
    let manifest = parse_yaml(&path.to_string_lossy(), &text).unwrap().manifest;

    write_manifest(&manifest).await.unwrap();
    let first = std::fs::read(dir.output("m.json")).unwrap();
    write_manifest(&manifest).await.unwrap();
    let second = std::fs::read(dir.output("m.json")).unwrap();

    assert_eq!(first, second);
    let json = dir.read_json("m.json");
    assert_eq!(json[0]["title"], "Z");
    assert_eq!(json[1]["title"], "A");
}

#[tokio::test]
async fn one_bad_manifest_never_blocks_the_others() {
    init_test_logging();
    let dir = ManifestDir::new();
    let first = dir.manifest("a.yml", "a.json", "  - {title: A, target: a.exe}\n");
    let not_mapping = dir.write("b.yml", "- just\n- a list\n");
    let unwritable = dir.write(
        "c.yml",
        &format!(
            "root: /games\noutput: {}\nentries:\n  - {{title: C, target: c.exe}}\n",
            dir.output("missing/c.json").display()
        ),
    );
    let last = dir.manifest("d.yml", "d.json", "  - {title: D, target: d.exe}\n");

    let report = run_batch(&[first, not_mapping, unwritable, last], &ExportOptions::default()).await;

    assert_eq!(report.total(), 4);
    assert_eq!(report.exported, 2);
    assert_eq!(report.failed, 2);
    assert_eq!(report.written, 2);
    assert!(!report.is_success());
    assert!(dir.output("a.json").exists());
    assert!(dir.output("d.json").exists());

    let stages: Vec<_> = report
        .outcomes
        .iter()
        .filter_map(|o| match o {
            ManifestOutcome::Failed { stage, .. } => Some(*stage),
            ManifestOutcome::Exported { .. } => None,
        })
        .collect();
    assert_eq!(stages, [Stage::Parse, Stage::Write]);
}

#[tokio::test]
async fn unknown_keys_are_reported_unless_silenced() {
    let dir = ManifestDir::new();
    let path = dir.write(
        "m.yml",
        "root: /g\noutput: /o.json\ncolour: blue\nentries:\n  - {title: A, target: a.exe, icon: a.png}\n",
    );

    let loud = ExportOptions {
        dry_run: true,
        ..ExportOptions::default()
    };
    let quiet = ExportOptions {
        parse: ParseOptions {
            warn_unknown_keys: false,
        },
        dry_run: true,
    };

    let count_warnings = |outcome: &ManifestOutcome| match outcome {
        ManifestOutcome::Exported { diagnostics, .. } => {
            diagnostics.iter().filter(|d| !d.is_error()).count()
        }
        ManifestOutcome::Failed { .. } => panic!("unexpected failure"),
    };

    assert_eq!(count_warnings(&process_manifest(&path, &loud).await), 2);
    assert_eq!(count_warnings(&process_manifest(&path, &quiet).await), 0);
    assert!(!Path::new("/o.json").exists());
}
