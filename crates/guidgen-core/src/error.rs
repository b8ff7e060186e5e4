//! Error types for guidgen

use std::path::PathBuf;
use thiserror::Error;

/// guidgen error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Include directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid declaration pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Duplicate override for candidate {0}")]
    DuplicateOverride(String),

    #[error("Override for {candidate} maps to invalid identifier {canonical:?}")]
    InvalidOverride { candidate: String, canonical: String },
}

/// Result type alias for guidgen
pub type Result<T> = std::result::Result<T, Error>;
