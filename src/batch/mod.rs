//! Batch processing of manifest files.
//!
//! This module finds manifests on disk and runs each one through parsing and
//! export independently.

mod pipeline;
mod scanner;

pub use pipeline::{
    BatchReport, ExportOptions, ManifestOutcome, Stage, load_manifest_document, process_manifest,
    run_batch,
};
pub use scanner::{ScanError, ScanResult, collect_manifest_paths, is_manifest_file, scan_directory};
