//! Core type definitions

/// A header that declares at least one GUID
///
/// Identifiers are stored without the leading `g` of the declared variable,
/// in the order they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    path: String,
    identifiers: Vec<String>,
}

impl HeaderFile {
    /// Create a header record from a `/`-separated path relative to the include root
    pub fn new(path: impl Into<String>, identifiers: Vec<String>) -> Self {
        Self {
            path: path.into(),
            identifiers,
        }
    }

    /// Path relative to the include root, as written in the `#include`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Declared identifiers without the leading `g`
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// A declared GUID variable and the macro that defines its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidDeclaration {
    /// Identifier without the leading `g` (`EfiGlobalVariableGuid`)
    pub identifier: String,
    /// Macro used as the initializer (`EFI_GLOBAL_VARIABLE`)
    pub macro_name: String,
}

impl GuidDeclaration {
    pub fn new(identifier: impl Into<String>, macro_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            macro_name: macro_name.into(),
        }
    }

    /// Variable name as declared in C (`gEfiGlobalVariableGuid`)
    pub fn variable_name(&self) -> String {
        format!("g{}", self.identifier)
    }
}

/// A header together with its resolved declarations, ready for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    pub header: HeaderFile,
    pub declarations: Vec<GuidDeclaration>,
}

/// Check that `name` is a valid C identifier
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name_restores_prefix() {
        let decl = GuidDeclaration::new("EfiGlobalVariableGuid", "EFI_GLOBAL_VARIABLE");
        assert_eq!(decl.variable_name(), "gEfiGlobalVariableGuid");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("EFI_GLOBAL_VARIABLE"));
        assert!(is_valid_identifier("_reserved1"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1394_GUID"));
        assert!(!is_valid_identifier("EFI-GUID"));
        assert!(!is_valid_identifier("EFI GUID"));
    }
}
