//! Header Scanner
//!
//! Walks an include tree and extracts the GUID variables each header declares.

use guidgen_core::{Error, HeaderFile, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Extracts `extern <guid type> g<Identifier>;` declarations from headers
pub struct HeaderScanner {
    declaration: Regex,
}

impl HeaderScanner {
    /// Create a scanner matching declarations of `guid_type` (e.g. `EFI_GUID`)
    pub fn new(guid_type: &str) -> Result<Self> {
        let pattern = format!(
            r"\bextern\s+{}\s+g([A-Za-z_][A-Za-z0-9_]*)\s*;",
            regex::escape(guid_type)
        );
        Ok(Self {
            declaration: Regex::new(&pattern)?,
        })
    }

    /// Extract declarations from one header's text
    ///
    /// Returns `None` when the header declares nothing, so it never gets an include.
    pub fn scan_source(&self, relative_path: &str, source: &str) -> Option<HeaderFile> {
        let identifiers: Vec<String> = self
            .declaration
            .captures_iter(source)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        if identifiers.is_empty() {
            return None;
        }

        debug!("{}: {} declarations", relative_path, identifiers.len());
        Some(HeaderFile::new(relative_path, identifiers))
    }

    /// Scan every regular file below `root`
    ///
    /// Headers come back sorted by relative path so the generated file does
    /// not depend on directory iteration order.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<HeaderFile>> {
        if !root.is_dir() {
            return Err(Error::RootNotFound(root.to_path_buf()));
        }

        let mut headers = Vec::new();
        let mut scanned = 0usize;

        // Symlinked headers are read through their target
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = relative_path(root, path);
            debug!("Scanning {}", relative);

            let source = fs::read_to_string(path).map_err(|source| Error::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            scanned += 1;

            if let Some(header) = self.scan_source(&relative, &source) {
                headers.push(header);
            }
        }

        headers.sort_by(|a, b| a.path().cmp(b.path()));

        info!(
            "Scanned {} files under {}, {} declare GUIDs",
            scanned,
            root.display(),
            headers.len()
        );
        Ok(headers)
    }
}

/// `/`-separated path of `path` below `root`
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
