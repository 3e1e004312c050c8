//! Manifest documents: alias resolution, validation, and the domain model.
//!
//! A manifest is a YAML mapping naming a base directory, an output path, and
//! a list of shortcuts:
//!
//! ```yaml
//! name: Emulators
//! root: /games/emu
//! output: ~/.srm/emulators.json
//! entries:
//!   - title: RetroArch
//!     target: retroarch/retroarch.exe
//!   - name: Dolphin
//!     exec: /opt/dolphin/dolphin-emu
//!     disabled: true
//! ```

pub mod alias;
mod model;
mod parser;
mod shortcut;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use alias::{AliasTable, ResolvedKey};
pub use model::{Manifest, fallback_name};
pub use parser::{ParsedManifest, parse_manifest};
pub use shortcut::{ExportRecord, ParsedShortcut, Shortcut, ShortcutError, parse_shortcut};
pub use validation::{
    Diagnostic, Severity, ShortcutOutcome, ValidationCounts, ValidationReport, Verdict,
    VerdictLevel,
};

/// Options threaded into every parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Report keys that match no known field or alias.
    pub warn_unknown_keys: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            warn_unknown_keys: true,
        }
    }
}
