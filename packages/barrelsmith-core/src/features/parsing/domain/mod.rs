//! Domain models for declaration extraction.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Which declarations count as exported during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportScope {
    /// Only declarations carrying an explicit `export` keyword.
    #[default]
    ExplicitOnly,

    /// Additionally treat declarations sitting directly at the module root
    /// as exported. Intended for a designated entry module written in an
    /// ambient, export-keyword-free style.
    TopLevelAmbient,
}

/// A type alias whose right-hand side is a union of string literals only,
/// e.g. `type Color = "red" | "blue";`.
///
/// Carries the alias name and the distinct literal values in the order they
/// appear in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionEnum {
    pub name: String,
    pub values: IndexSet<String>,
}

impl UnionEnum {
    pub fn new(name: impl Into<String>, values: IndexSet<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Exported declarations discovered in a single module.
///
/// All sets preserve first-seen-in-tree order; generated output iterates
/// them in that order, which keeps generation byte-stable across runs on
/// unchanged input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleDeclarations {
    /// Exported interface names.
    pub interfaces: IndexSet<String>,

    /// Exported type-alias names that are not literal string unions.
    pub types: IndexSet<String>,

    /// Exported enum names.
    pub enums: IndexSet<String>,

    /// Exported literal-string-union aliases, in declaration order. The
    /// same name may appear more than once; consumers fold later value sets
    /// into the first occurrence.
    pub union_enums: Vec<UnionEnum>,
}

impl ModuleDeclarations {
    /// True when no exported declaration of any kind was found.
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
            && self.types.is_empty()
            && self.enums.is_empty()
            && self.union_enums.is_empty()
    }

    /// True when `name` is declared as an interface or a plain type alias.
    pub fn declares_type(&self, name: &str) -> bool {
        self.interfaces.contains(name) || self.types.contains(name)
    }

    /// True when `name` is declared as a literal string union.
    pub fn declares_union_enum(&self, name: &str) -> bool {
        self.union_enums.iter().any(|u| u.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let decls = ModuleDeclarations::default();
        assert!(decls.is_empty());
        assert!(!decls.declares_type("Anything"));
    }

    #[test]
    fn declares_type_covers_interfaces_and_aliases() {
        let mut decls = ModuleDeclarations::default();
        decls.interfaces.insert("User".to_string());
        decls.types.insert("UserId".to_string());

        assert!(decls.declares_type("User"));
        assert!(decls.declares_type("UserId"));
        assert!(!decls.declares_type("Session"));
        assert!(!decls.is_empty());
    }

    #[test]
    fn declares_union_enum_matches_by_name() {
        let mut decls = ModuleDeclarations::default();
        decls.union_enums.push(UnionEnum::new(
            "Color",
            IndexSet::from(["red".to_string(), "blue".to_string()]),
        ));

        assert!(decls.declares_union_enum("Color"));
        assert!(!decls.declares_union_enum("Size"));
    }
}
