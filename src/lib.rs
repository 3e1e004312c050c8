//! srm library - YAML shortcut manifests to Steam ROM Manager JSON.
//!
//! This library exposes the core functionality of the `srm` CLI for use in
//! tests and other tools.
//!
//! # Modules
//!
//! - `manifest`: Key aliases, manifest and shortcut parsing, validation reports
//! - `export`: Rendering and writing the JSON output file
//! - `batch`: Manifest discovery and the per-manifest pipeline
//! - `config`: Run settings file and path handling
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
#![forbid(unsafe_code)]

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod theme;
