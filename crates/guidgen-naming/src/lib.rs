//! guidgen Naming
//!
//! Derives the defining macro of a GUID from its variable name.
//!
//! MdePkg names a GUID variable `gEfiFooBarGuid` and its value macro
//! `EFI_FOO_BAR_GUID`. The conversion is a two-rule word-boundary insertion:
//!
//! 1. `_` before every capitalized word (`[A-Z][a-z]+`) that has any character
//!    in front of it. Matches do not overlap, so the character in front of a
//!    word is never itself the start of a match.
//! 2. `_` between a lowercase letter or digit and a following uppercase letter.
//!
//! The result is uppercased. Acronym runs and embedded version digits make the
//! conversion ambiguous, for instance `EfiAcpi20TableGuid` yields
//! `EFI_ACPI20_TABLE_GUID` where MdePkg defines `EFI_ACPI_20_TABLE_GUID`.
//! Such cases are corrected through the [`OverrideTable`], never by tuning
//! the rules.

pub mod overrides;

pub use overrides::{OverrideTable, BUILTIN_OVERRIDES};

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("word start pattern"));
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary pattern"));

/// Heuristic macro name for an identifier (without its leading `g`)
pub fn candidate_name(identifier: &str) -> String {
    let words = WORD_START.replace_all(identifier, "${1}_${2}");
    CAMEL_BOUNDARY
        .replace_all(&words, "${1}_${2}")
        .to_uppercase()
}

/// Outcome of resolving one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Name produced by the heuristic
    pub candidate: String,
    /// Name used in the generated definition
    pub macro_name: String,
    /// Whether the override table replaced the candidate
    pub overridden: bool,
}

/// Resolves identifiers against an override table
pub struct IdentifierResolver<'a> {
    overrides: &'a OverrideTable,
}

impl<'a> IdentifierResolver<'a> {
    pub fn new(overrides: &'a OverrideTable) -> Self {
        Self { overrides }
    }

    /// Run the heuristic, then apply a curated correction if there is one
    ///
    /// A candidate without an entry is used unchanged, even when it names a
    /// macro that does not exist upstream.
    pub fn resolve(&self, identifier: &str) -> Resolution {
        let candidate = candidate_name(identifier);
        match self.overrides.get(&candidate) {
            Some(canonical) => Resolution {
                macro_name: canonical.to_string(),
                candidate,
                overridden: true,
            },
            None => Resolution {
                macro_name: candidate.clone(),
                candidate,
                overridden: false,
            },
        }
    }

    /// Final macro name for an identifier
    pub fn macro_name(&self, identifier: &str) -> String {
        self.resolve(identifier).macro_name
    }
}
