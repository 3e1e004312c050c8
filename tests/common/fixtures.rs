//! Temporary manifest directories for tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory holding manifests and their outputs.
///
/// Cleaned up when dropped.
pub struct ManifestDir {
    pub dir: TempDir,
}

impl ManifestDir {
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path for an output file inside the scratch directory.
    #[must_use]
    pub fn output(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Write raw YAML to `name`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        std::fs::write(&path, yaml).expect("Failed to write fixture");
        path
    }

    /// Write a manifest with base directory `/games` that exports to
    /// `output` in this directory. `shortcuts` is the YAML list body.
    pub fn manifest(&self, name: &str, output: &str, shortcuts: &str) -> PathBuf {
        let yaml = format!(
            "baseDirectory: /games\noutputPath: {}\nshortcuts:\n{shortcuts}",
            self.output(output).display()
        );
        self.write(name, &yaml)
    }

    /// Read and parse an output file.
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or not JSON.
    #[must_use]
    pub fn read_json(&self, output: &str) -> serde_json::Value {
        let text = std::fs::read_to_string(self.output(output)).expect("output file missing");
        serde_json::from_str(&text).expect("output is not JSON")
    }
}

impl Default for ManifestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Three shortcuts: one enabled, one disabled, one malformed.
pub const MIXED_SHORTCUTS: &str = "  - {title: A, target: a.exe}
  - {title: B, target: b.exe, enabled: false}
  - {bogus: true}
";

/// Three disabled shortcuts.
pub const ALL_DISABLED: &str = "  - {title: A, target: a.exe, enabled: false}
  - {title: B, target: b.exe, disabled: true}
  - {name: C, exec: c.exe, enable: false}
";
