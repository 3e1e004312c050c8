//! Error types for manifest loading and export.

use thiserror::Error;

/// Primary error type for manifest operations.
///
/// Every variant except the configuration and alias errors is fatal to a single
/// manifest only; the batch loop records it and moves on.
#[derive(Error, Debug)]
pub enum SrmError {
    // Manifest source errors
    #[error("Manifest file not found: {path}")]
    ManifestNotFound { path: String },

    #[error("Failed to read manifest '{path}': {reason}")]
    ManifestRead { path: String, reason: String },

    #[error("Invalid YAML in '{path}': {reason}")]
    YamlParse { path: String, reason: String },

    #[error("Manifest '{path}' must be a mapping, found {found}")]
    NotAMapping { path: String, found: String },

    #[error("Manifest '{path}' is missing required field '{field}'")]
    MissingField { field: &'static str, path: String },

    // Export errors
    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize shortcuts: {0}")]
    Serialize(#[from] serde_json::Error),

    // Alias table errors
    #[error("Alias '{alias}' maps to both '{first}' and '{second}'")]
    AliasConflict {
        alias: String,
        first: String,
        second: String,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("No manifests to process")]
    NoManifests,

    #[error(transparent)]
    Scan(#[from] crate::batch::ScanError),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SrmError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound { .. }
                | Self::YamlParse { .. }
                | Self::NotAMapping { .. }
                | Self::MissingField { .. }
                | Self::ConfigNotFound { .. }
                | Self::NoManifests
                | Self::Scan(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } => Some(match *field {
                "baseDirectory" => "Add a 'baseDirectory' (or 'root', 'baseDir') key",
                "outputPath" => "Add an 'outputPath' (or 'output', 'outputFile') key",
                _ => "Add the missing key to the manifest",
            }),
            Self::NotAMapping { .. } => Some("The top level of a manifest must be key: value pairs"),
            Self::WriteFailed { .. } => Some("Check that the output directory exists and is writable"),
            Self::NoManifests => Some("Pass manifest files or directories, or set 'manifests' in --config"),
            Self::ConfigNotFound { .. } => Some("Check the --config path"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using SrmError.
pub type Result<T> = std::result::Result<T, SrmError>;
