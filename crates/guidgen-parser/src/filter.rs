//! Conflict Filter
//!
//! Some MdePkg headers cannot be defined together with the rest: a few pairs
//! declare the same names, and some subsystems (CPER, user management, KMS)
//! or the PI/PPI headers declare GUIDs under a different convention. Those
//! are dropped before any name is resolved.

use guidgen_core::{HeaderFile, IgnoreConfig};
use std::collections::BTreeSet;
use tracing::debug;

/// Headers that collide with another header or are unsupported
const IGNORED_HEADERS: &[&str] = &[
    // These two define the same names
    "Protocol/Rest.h",
    "Protocol/RestEx.h",
    "Protocol/UserManager.h",
    "Protocol/Kms.h",
    "Guid/Cper.h",
    "Guid/EventGroup.h",
];

/// Platform-initialization headers use a different GUID convention
const RESERVED_PREFIXES: &[&str] = &["Pi/", "Ppi/"];

/// Paths and prefixes excluded from generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    paths: BTreeSet<String>,
    prefixes: Vec<String>,
}

impl IgnoreSet {
    /// An ignore set that excludes nothing
    pub fn empty() -> Self {
        Self {
            paths: BTreeSet::new(),
            prefixes: Vec::new(),
        }
    }

    /// The curated MdePkg ignore set
    pub fn builtin() -> Self {
        Self {
            paths: IGNORED_HEADERS.iter().map(|p| p.to_string()).collect(),
            prefixes: RESERVED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Add configured paths and prefixes on top of this set
    pub fn extend(mut self, config: &IgnoreConfig) -> Self {
        self.paths.extend(config.paths.iter().cloned());
        for prefix in &config.prefixes {
            if !self.prefixes.contains(prefix) {
                self.prefixes.push(prefix.clone());
            }
        }
        self
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Drops headers listed in an [`IgnoreSet`]
#[derive(Debug, Clone, Default)]
pub struct ConflictFilter {
    ignore: IgnoreSet,
}

impl ConflictFilter {
    pub fn new(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }

    /// Whether a header (path relative to the include root) must be left out
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.ignore.paths.contains(relative_path)
            || self
                .ignore
                .prefixes
                .iter()
                .any(|prefix| relative_path.starts_with(prefix.as_str()))
    }

    /// Keep the headers that may be emitted, preserving their order
    pub fn retain(&self, headers: Vec<HeaderFile>) -> Vec<HeaderFile> {
        headers
            .into_iter()
            .filter(|header| {
                let excluded = self.is_excluded(header.path());
                if excluded {
                    debug!("Skipping ignored header {}", header.path());
                }
                !excluded
            })
            .collect()
    }

    pub fn ignore_set(&self) -> &IgnoreSet {
        &self.ignore
    }
}
