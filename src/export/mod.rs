//! Export of validated manifests to Steam ROM Manager JSON files.

mod writer;

pub use writer::{WriteResult, WriteStats, render_json, write_manifest};
