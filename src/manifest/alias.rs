//! Key alias tables for manifest and shortcut documents.
//!
//! Users may spell a field several ways (`root`, `baseDir`, `directory`, ...).
//! Each document kind has one [`AliasTable`] that maps every accepted spelling
//! to its canonical key.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::trace;

use crate::error::{Result, SrmError};

/// Canonical manifest keys.
pub mod manifest_keys {
    pub const SOURCE_NAME: &str = "sourceName";
    pub const BASE_DIRECTORY: &str = "baseDirectory";
    pub const OUTPUT_PATH: &str = "outputPath";
    pub const SHORTCUTS: &str = "shortcuts";
}

/// Canonical shortcut keys.
pub mod shortcut_keys {
    pub const TITLE: &str = "title";
    pub const TARGET: &str = "target";
    pub const ENABLED: &str = "enabled";
    pub const DISABLED: &str = "disabled";
}

const MANIFEST_ALIASES: &[(&str, &[&str])] = &[
    (manifest_keys::SOURCE_NAME, &["name"]),
    (
        manifest_keys::BASE_DIRECTORY,
        &["root", "rootDir", "rootDirectory", "directory", "baseDir"],
    ),
    (
        manifest_keys::OUTPUT_PATH,
        &["output", "outputFile", "outputDir", "outputDirectory"],
    ),
    (manifest_keys::SHORTCUTS, &["entries", "titles"]),
];

const SHORTCUT_ALIASES: &[(&str, &[&str])] = &[
    (shortcut_keys::TITLE, &["name"]),
    (shortcut_keys::TARGET, &["exec"]),
    (shortcut_keys::ENABLED, &["enable"]),
    (shortcut_keys::DISABLED, &["disable"]),
];

static MANIFEST_TABLE: LazyLock<AliasTable> = LazyLock::new(|| {
    AliasTable::new("manifest", MANIFEST_ALIASES).expect("built-in manifest aliases are consistent")
});

static SHORTCUT_TABLE: LazyLock<AliasTable> = LazyLock::new(|| {
    AliasTable::new("shortcut", SHORTCUT_ALIASES).expect("built-in shortcut aliases are consistent")
});

/// Result of resolving one user-supplied key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedKey<'a> {
    /// The key exactly as written in the document.
    pub given_key: &'a str,
    /// The canonical key, or `given_key` itself when no alias matched.
    pub resolved_key: &'a str,
    /// Whether `resolved_key` is one of the table's canonical keys.
    pub recognized: bool,
}

/// Lookup table from accepted key spellings to canonical keys.
#[derive(Debug, Clone)]
pub struct AliasTable {
    section: &'static str,
    lookup: HashMap<&'static str, &'static str>,
}

impl AliasTable {
    /// Build a table from `(canonical, aliases)` pairs.
    ///
    /// Every canonical key also resolves to itself. Fails when one spelling
    /// would map to two different canonical keys.
    pub fn new(section: &'static str, entries: &[(&'static str, &[&'static str])]) -> Result<Self> {
        let mut lookup: HashMap<&'static str, &'static str> = HashMap::new();

        let mut insert = |spelling: &'static str, canonical: &'static str| -> Result<()> {
            match lookup.insert(spelling, canonical) {
                Some(previous) if previous != canonical => Err(SrmError::AliasConflict {
                    alias: spelling.to_string(),
                    first: previous.to_string(),
                    second: canonical.to_string(),
                }),
                _ => Ok(()),
            }
        };

        for &(canonical, _) in entries {
            insert(canonical, canonical)?;
        }
        for &(canonical, aliases) in entries {
            for &alias in aliases {
                insert(alias, canonical)?;
            }
        }

        trace!(section, spellings = lookup.len(), "Built alias table");
        Ok(Self { section, lookup })
    }

    /// The built-in table for manifest documents.
    pub fn manifest() -> &'static Self {
        &MANIFEST_TABLE
    }

    /// The built-in table for shortcut entries.
    pub fn shortcut() -> &'static Self {
        &SHORTCUT_TABLE
    }

    /// Name of the document section this table serves.
    pub const fn section(&self) -> &'static str {
        self.section
    }

    /// Resolve a raw key to its canonical form.
    pub fn resolve<'a>(&self, key: &'a str) -> ResolvedKey<'a> {
        match self.lookup.get(key) {
            Some(&canonical) => ResolvedKey {
                given_key: key,
                resolved_key: canonical,
                recognized: true,
            },
            None => ResolvedKey {
                given_key: key,
                resolved_key: key,
                recognized: false,
            },
        }
    }
}
