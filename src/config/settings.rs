//! Run settings loaded from a YAML or TOML file.
//!
//! ```yaml
//! manifests:
//!   - ./manifests
//!   - ~/games/emulators.manifest.yml
//! warn_unknown_keys: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use super::path::resolve_path;
use crate::error::{Result, SrmError};

/// Settings file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml, .yml).
    Yaml,
    /// TOML format (.toml).
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        trace!(extension = %ext, "Detecting config format from extension");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Manifest files or directories to process.
    pub manifests: Vec<PathBuf>,

    /// Report unrecognized manifest and shortcut keys.
    pub warn_unknown_keys: bool,

    /// Parse and report without writing any output.
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifests: Vec::new(),
            warn_unknown_keys: true,
            dry_run: false,
        }
    }
}

impl Settings {
    /// Resolve relative manifest paths against `base_dir`.
    #[must_use]
    pub fn resolved_against(mut self, base_dir: &Path) -> Self {
        self.manifests = self
            .manifests
            .iter()
            .map(|p| resolve_path(p, base_dir))
            .collect();
        self
    }
}

/// Load settings from a file.
///
/// The format is detected from the extension, and relative manifest paths
/// are resolved against the settings file's directory.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    info!("Loading settings file");

    let format = ConfigFormat::from_extension(path).ok_or_else(|| {
        SrmError::ConfigParse(format!(
            "Unknown config format for '{}': expected .yaml, .yml, or .toml",
            path.display()
        ))
    })?;
    debug!(format = ?format, "Detected config format");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SrmError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            SrmError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read settings file");

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(load_settings_from_str(&content, format)?.resolved_against(base_dir))
}

/// Parse settings from a string with a specified format.
#[instrument(skip(content), fields(format = ?format, content_len = content.len()))]
pub fn load_settings_from_str(content: &str, format: ConfigFormat) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| SrmError::ConfigParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| SrmError::ConfigParse(format!("TOML: {e}")))?
        }
    };

    info!(
        manifests = settings.manifests.len(),
        warn_unknown_keys = settings.warn_unknown_keys,
        dry_run = settings.dry_run,
        "Settings loaded"
    );
    Ok(settings)
}
