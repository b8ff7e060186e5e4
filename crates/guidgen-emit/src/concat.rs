//! Manifest Concatenation
//!
//! Builds a single translation unit from an ordered list of source files,
//! each preceded by a comment naming it.

use crate::write_output;
use guidgen_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Comment placed at the top of the concatenated file
pub const CONCAT_BANNER: &str = "/*\n * AUTO GENERATED FILE\n */\n \n";

/// Default manifest listing the files to concatenate
pub const DEFAULT_MANIFEST: &str = "edk2core.txt";

/// Default destination of the concatenation
pub const DEFAULT_CONCAT_OUTPUT: &str = "edk2.c";

/// Concatenates the files listed in a manifest
pub struct ConcatGenerator {
    manifest: PathBuf,
    output: PathBuf,
    strip_prefix: String,
    foundation_include: String,
    base_dir: Option<PathBuf>,
}

impl ConcatGenerator {
    pub fn new(manifest: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            output: output.into(),
            strip_prefix: "edk2/".to_string(),
            foundation_include: "Uefi.h".to_string(),
            base_dir: None,
        }
    }

    /// Prefix removed from paths in the per-file comments.
    ///
    /// Default: `edk2/`
    pub fn strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = prefix.into();
        self
    }

    /// Header included after the banner.
    ///
    /// Default: `Uefi.h`
    pub fn foundation_include(mut self, header: impl Into<String>) -> Self {
        self.foundation_include = header.into();
        self
    }

    /// Directory manifest entries are relative to.
    ///
    /// Default: the working directory
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Paths listed in the manifest, in order, blank lines skipped
    ///
    /// Only line terminators are removed; other whitespace belongs to the path.
    pub fn entries(&self) -> Result<Vec<String>> {
        let content = read(&self.manifest)?;
        Ok(content
            .lines()
            .map(|line| line.trim_end_matches(['\r', '\n']))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Render the concatenated translation unit
    pub fn render(&self) -> Result<String> {
        let mut out = format!("{}#include <{}>\n \n", CONCAT_BANNER, self.foundation_include);

        for entry in self.entries()? {
            let path = match &self.base_dir {
                Some(base) => base.join(&entry),
                None => PathBuf::from(&entry),
            };
            debug!("Appending {}", path.display());

            let label = entry.strip_prefix(self.strip_prefix.as_str()).unwrap_or(entry.as_str());
            out.push_str(&format!("/* {} */\n\n", label));
            out.push_str(&read(&path)?);
            out.push('\n');
        }

        Ok(out)
    }

    /// Render and overwrite the output file
    pub fn run(&self) -> Result<()> {
        let text = self.render()?;
        write_output(&self.output, &text)?;
        info!("Wrote {}", self.output.display());
        Ok(())
    }
}

impl Default for ConcatGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST, DEFAULT_CONCAT_OUTPUT)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("edk2/MdePkg/Library/BaseLib")).unwrap();
        fs::write(
            root.join("edk2/MdePkg/Library/BaseLib/String.c"),
            "UINTN StrLen(CONST CHAR16 *s);\n",
        )
        .unwrap();
        fs::write(
            root.join("edk2/MdePkg/Library/BaseLib/Math.c"),
            "UINT64 MultU64x32(UINT64 a, UINT32 b);\n",
        )
        .unwrap();
        fs::write(
            root.join("edk2core.txt"),
            "edk2/MdePkg/Library/BaseLib/String.c\n\nedk2/MdePkg/Library/BaseLib/Math.c\n",
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_render_in_manifest_order() {
        let temp = setup();
        let generator = ConcatGenerator::new(temp.path().join("edk2core.txt"), "unused")
            .base_dir(temp.path());

        let text = generator.render().unwrap();
        assert_eq!(
            text,
            "/*\n * AUTO GENERATED FILE\n */\n \n#include <Uefi.h>\n \n\
             /* MdePkg/Library/BaseLib/String.c */\n\n\
             UINTN StrLen(CONST CHAR16 *s);\n\n\
             /* MdePkg/Library/BaseLib/Math.c */\n\n\
             UINT64 MultU64x32(UINT64 a, UINT32 b);\n\n"
        );
    }

    #[test]
    fn test_run_writes_output() {
        let temp = setup();
        let output = temp.path().join("edk2.c");
        ConcatGenerator::new(temp.path().join("edk2core.txt"), &output)
            .base_dir(temp.path())
            .strip_prefix("edk2/MdePkg/")
            .run()
            .unwrap();

        let text = fs::read_to_string(output).unwrap();
        assert!(text.contains("/* Library/BaseLib/Math.c */\n"));
    }

    #[test]
    fn test_missing_entry_is_fatal() {
        let temp = setup();
        fs::write(temp.path().join("edk2core.txt"), "edk2/Missing.c\n").unwrap();
        let generator = ConcatGenerator::new(temp.path().join("edk2core.txt"), "unused")
            .base_dir(temp.path());

        assert!(matches!(generator.render(), Err(Error::ReadFile { .. })));
    }

    #[test]
    fn test_entry_keeps_trailing_spaces() {
        let temp = setup();
        fs::write(temp.path().join("edk2/Trailing.c "), "VOID Spaced(VOID);\n").unwrap();
        fs::write(
            temp.path().join("edk2core.txt"),
            "edk2/Trailing.c \r\n   \r\nedk2/MdePkg/Library/BaseLib/Math.c\r\n",
        )
        .unwrap();
        let generator = ConcatGenerator::new(temp.path().join("edk2core.txt"), "unused")
            .base_dir(temp.path());

        assert_eq!(
            generator.entries().unwrap(),
            vec!["edk2/Trailing.c ", "edk2/MdePkg/Library/BaseLib/Math.c"]
        );
        let text = generator.render().unwrap();
        assert!(text.contains("/* Trailing.c  */\n\nVOID Spaced(VOID);\n"));
    }
}
