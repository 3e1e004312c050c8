//! Path resolution helpers for settings files and manifest paths.
//!
//! Supports absolute paths, paths relative to the settings file, and "~" home
//! directory expansion.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, SrmError};

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| SrmError::ConfigInvalid("Could not determine home directory".to_string()))
}

/// Expand a leading `~` to the home directory.
///
/// Returns the path unchanged when it has no `~` prefix or the home
/// directory is unknown.
pub fn expand_home(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if path_str != "~" && !path_str.starts_with("~/") {
        return path.to_path_buf();
    }

    let Ok(home) = home_dir() else {
        return path.to_path_buf();
    };
    let rest = path_str.strip_prefix("~/").unwrap_or("");
    let expanded = if rest.is_empty() { home } else { home.join(rest) };
    debug!(
        original = %path.display(),
        expanded = %expanded.display(),
        "Expanded home directory path"
    );
    expanded
}

/// Resolve a path found in a settings file.
///
/// Resolution rules:
/// 1. Paths starting with `~`: expanded to home directory
/// 2. Absolute paths: used as-is
/// 3. Relative paths: resolved relative to `base_dir`
pub fn resolve_path(path: &Path, base_dir: &Path) -> PathBuf {
    trace!(
        path = %path.display(),
        base_dir = %base_dir.display(),
        "Resolving path"
    );

    let expanded = expand_home(path);
    if expanded.is_absolute() {
        return expanded;
    }

    let resolved = base_dir.join(&expanded);
    debug!(
        original = %path.display(),
        resolved = %resolved.display(),
        "Resolved relative path"
    );
    resolved
}
