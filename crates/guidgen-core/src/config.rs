//! Configuration types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default include tree scanned by the GUID generator
pub const DEFAULT_INCLUDE_ROOT: &str = "edk2/MdePkg/Include";

/// Default destination of the GUID generator
pub const DEFAULT_OUTPUT: &str = "guids.c";

/// GUID generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the header tree
    pub include_root: PathBuf,

    /// Generated source file, relative to the working directory
    pub output: PathBuf,

    /// C type name used both for matching declarations and for emitting definitions
    pub guid_type: String,

    /// Header included once before every header block
    pub foundation_include: String,

    /// Extra headers to leave out, on top of the builtin ignore set
    pub ignore: IgnoreConfig,

    /// Extra candidate-name corrections, layered over the builtin table
    pub overrides: Vec<OverrideEntry>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_root: PathBuf::from(DEFAULT_INCLUDE_ROOT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            guid_type: "EFI_GUID".into(),
            foundation_include: "Uefi.h".into(),
            ignore: IgnoreConfig::default(),
            overrides: vec![],
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let content = read_config(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration from a JSON file
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = read_config(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load configuration, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::load_json(path),
            Some("yaml") | Some("yml") => Self::load_yaml(path),
            other => Err(Error::Config(format!(
                "unsupported config format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Additional headers excluded from generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Exact relative paths, e.g. `Protocol/Foo.h`
    pub paths: Vec<String>,

    /// Relative path prefixes, e.g. `Pi/`
    pub prefixes: Vec<String>,
}

/// One configured correction of a heuristic candidate name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Name produced by the heuristic
    pub candidate: String,
    /// Macro actually defined upstream
    pub canonical: String,
}

impl OverrideEntry {
    pub fn new(candidate: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            canonical: canonical.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_edk2_layout() {
        let config = GeneratorConfig::default();
        assert_eq!(config.include_root, PathBuf::from("edk2/MdePkg/Include"));
        assert_eq!(config.output, PathBuf::from("guids.c"));
        assert_eq!(config.guid_type, "EFI_GUID");
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_load_yaml_partial() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("guidgen.yaml");
        fs::write(
            &path,
            r#"
include_root: vendor/Include
ignore:
  paths: [Protocol/Foo.h]
overrides:
  - candidate: EFI_FOO_GUID
    canonical: EFI_FOO_PROTOCOL_GUID
"#,
        )
        .unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.include_root, PathBuf::from("vendor/Include"));
        assert_eq!(config.output, PathBuf::from("guids.c"));
        assert_eq!(config.ignore.paths, vec!["Protocol/Foo.h".to_string()]);
        assert!(config.ignore.prefixes.is_empty());
        assert_eq!(
            config.overrides,
            vec![OverrideEntry::new("EFI_FOO_GUID", "EFI_FOO_PROTOCOL_GUID")]
        );
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("guidgen.json");
        fs::write(&path, r#"{"guid_type": "GUID", "output": "out/guids.c"}"#).unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.guid_type, "GUID");
        assert_eq!(config.output, PathBuf::from("out/guids.c"));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let err = GeneratorConfig::load(Path::new("guidgen.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/guidgen.yaml")).unwrap_err();
        assert!(matches!(err, Error::ReadFile { .. }));
    }
}
