//! Run settings files and manifest discovery.

use std::path::PathBuf;

use srm::batch::{ExportOptions, collect_manifest_paths, run_batch};
use srm::config::load_settings;
use srm::error::SrmError;

use crate::common::fixtures::ManifestDir;

#[test]
fn toml_settings_resolve_relative_to_their_file() {
    let dir = ManifestDir::new();
    let settings_path = dir.write(
        "conf/srm.toml",
        "manifests = [\"../manifests\", \"/abs/one.yml\"]\nwarn_unknown_keys = false\n",
    );

    let settings = load_settings(&settings_path).unwrap();
    assert_eq!(
        settings.manifests,
        [dir.path().join("conf").join("../manifests"), PathBuf::from("/abs/one.yml")]
    );
    assert!(!settings.warn_unknown_keys);
    assert!(!settings.dry_run);
}

#[test]
fn yaml_settings_reject_unknown_fields() {
    let dir = ManifestDir::new();
    let path = dir.write("srm.yaml", "manifests: []\nparallel: true\n");
    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, SrmError::ConfigParse(_)));
}

#[test]
fn missing_settings_file_is_reported() {
    let err = load_settings("/nonexistent/srm.toml").unwrap_err();
    assert!(matches!(err, SrmError::ConfigNotFound { .. }));
    assert!(err.is_user_recoverable());
}

#[tokio::test]
async fn directory_from_settings_is_scanned_in_order() {
    let dir = ManifestDir::new();
    dir.manifest("manifests/b.yaml", "b.json", "  - {title: B, target: b.exe}\n");
    dir.manifest("manifests/a.yml", "a.json", "  - {title: A, target: a.exe}\n");
    dir.write("manifests/notes.txt", "not a manifest");
    let settings_path = dir.write("srm.yml", "manifests:\n  - manifests\ndry_run: true\n");

    let settings = load_settings(&settings_path).unwrap();
    let scan = collect_manifest_paths(&settings.manifests).unwrap();
    assert_eq!(scan.ignored, [dir.path().join("manifests").join("notes.txt")]);
    let paths = scan.manifests;
    let names: Vec<_> = paths
        .iter()
        .filter_map(|p| p.file_name()?.to_str())
        .collect();
    assert_eq!(names, ["a.yml", "b.yaml"]);

    let options = ExportOptions {
        dry_run: settings.dry_run,
        ..ExportOptions::default()
    };
    let report = run_batch(&paths, &options).await;
    assert_eq!(report.exported, 2);
    assert_eq!(report.written, 0);
    assert!(!dir.output("a.json").exists());
}
