//! Output Emitter
//!
//! Turns resolved header blocks into the text of `guids.c`.

use guidgen_core::HeaderBlock;

/// Comment placed at the top of the generated GUID file
pub const GUIDS_BANNER: &str = "/*\n * AUTO GENERATED FILE\n *\n * Just a quick way to generate all the guids that EDK2 defines\n */\n \n";

/// Renders `#include` + definition blocks
pub struct OutputEmitter {
    guid_type: String,
    foundation_include: String,
}

impl OutputEmitter {
    pub fn new(guid_type: impl Into<String>, foundation_include: impl Into<String>) -> Self {
        Self {
            guid_type: guid_type.into(),
            foundation_include: foundation_include.into(),
        }
    }

    /// Banner and the foundational include
    pub fn preamble(&self) -> String {
        format!("{}#include <{}>\n \n", GUIDS_BANNER, self.foundation_include)
    }

    /// Render all blocks in the given order
    ///
    /// Each block is its header's include, one definition per declaration,
    /// then a blank line. Blocks without declarations produce nothing.
    pub fn render(&self, blocks: &[HeaderBlock]) -> String {
        let mut out = self.preamble();
        for block in blocks {
            out.push_str(&self.render_block(block));
        }
        out
    }

    pub fn render_block(&self, block: &HeaderBlock) -> String {
        if block.declarations.is_empty() {
            return String::new();
        }

        let mut out = format!("#include <{}>\n", block.header.path());
        for decl in &block.declarations {
            out.push_str(&format!(
                "{} {} = {};\n",
                self.guid_type,
                decl.variable_name(),
                decl.macro_name
            ));
        }
        out.push('\n');
        out
    }
}

impl Default for OutputEmitter {
    fn default() -> Self {
        Self::new("EFI_GUID", "Uefi.h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidgen_core::{GuidDeclaration, HeaderFile};
    use pretty_assertions::assert_eq;

    fn block(path: &str, decls: &[(&str, &str)]) -> HeaderBlock {
        HeaderBlock {
            header: HeaderFile::new(path, decls.iter().map(|(id, _)| id.to_string()).collect()),
            declarations: decls
                .iter()
                .map(|(id, name)| GuidDeclaration::new(*id, *name))
                .collect(),
        }
    }

    #[test]
    fn test_preamble() {
        let emitter = OutputEmitter::default();
        assert_eq!(
            emitter.preamble(),
            "/*\n * AUTO GENERATED FILE\n *\n * Just a quick way to generate all the guids that EDK2 defines\n */\n \n#include <Uefi.h>\n \n"
        );
    }

    #[test]
    fn test_render_blocks() {
        let emitter = OutputEmitter::default();
        let text = emitter.render(&[
            block(
                "Guid/Acpi.h",
                &[
                    ("EfiAcpi20TableGuid", "EFI_ACPI_20_TABLE_GUID"),
                    ("EfiAcpiTableGuid", "EFI_ACPI_TABLE_GUID"),
                ],
            ),
            block("Guid/GlobalVariable.h", &[("EfiGlobalVariableGuid", "EFI_GLOBAL_VARIABLE")]),
        ]);

        let expected = format!(
            "{}{}",
            emitter.preamble(),
            "#include <Guid/Acpi.h>\n\
             EFI_GUID gEfiAcpi20TableGuid = EFI_ACPI_20_TABLE_GUID;\n\
             EFI_GUID gEfiAcpiTableGuid = EFI_ACPI_TABLE_GUID;\n\
             \n\
             #include <Guid/GlobalVariable.h>\n\
             EFI_GUID gEfiGlobalVariableGuid = EFI_GLOBAL_VARIABLE;\n\
             \n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_block_emits_nothing() {
        let emitter = OutputEmitter::default();
        let empty = HeaderBlock {
            header: HeaderFile::new("Guid/Empty.h", vec![]),
            declarations: vec![],
        };
        assert_eq!(emitter.render(&[empty]), emitter.preamble());
    }

    #[test]
    fn test_custom_guid_type() {
        let emitter = OutputEmitter::new("GUID", "Base.h");
        let text = emitter.render(&[block("Guid/Foo.h", &[("FooGuid", "FOO_GUID")])]);
        assert!(text.contains("#include <Base.h>\n"));
        assert!(text.contains("GUID gFooGuid = FOO_GUID;\n"));
    }
}
