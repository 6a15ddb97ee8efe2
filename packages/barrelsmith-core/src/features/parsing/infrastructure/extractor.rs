//! Declaration extractor.
//!
//! Walks every node of a parsed TypeScript module and records the exported
//! interface, type-alias and enum declarations. Type aliases whose
//! right-hand side is a union of string literals are recorded separately as
//! union enums; any other alias shape stays a plain type. Unrecognized node
//! kinds are ignored, so new grammar constructs never break extraction.

use indexmap::IndexSet;
use tracing::debug;
use tree_sitter::Node;

use super::languages::typescript::{
    declaration_name, node_kinds, string_literal_text,
};
use crate::features::parsing::domain::{ExportScope, ModuleDeclarations, UnionEnum};

/// Extract exported declarations from a parsed module.
///
/// `root` is the tree root (`program` node), `source` the text it was parsed
/// from. Sets in the result preserve first-seen order.
pub fn extract_declarations(root: Node, source: &str, scope: ExportScope) -> ModuleDeclarations {
    let mut decls = ModuleDeclarations::default();
    visit(root, source, scope, &mut decls);
    decls
}

fn visit(node: Node, source: &str, scope: ExportScope, decls: &mut ModuleDeclarations) {
    match node.kind() {
        node_kinds::INTERFACE_DECLARATION => {
            if let Some(name) = declaration_name(&node, source) {
                let exported = is_exported(&node, scope);
                debug!(name = %name, exported, "interface declaration");
                if exported {
                    decls.interfaces.insert(name);
                }
            }
        }
        node_kinds::TYPE_ALIAS_DECLARATION => {
            if let Some(name) = declaration_name(&node, source) {
                let exported = is_exported(&node, scope);
                debug!(name = %name, exported, "type alias declaration");
                if exported {
                    classify_alias(&node, source, name, decls);
                }
            }
        }
        node_kinds::ENUM_DECLARATION => {
            if let Some(name) = declaration_name(&node, source) {
                let exported = is_exported(&node, scope);
                debug!(name = %name, exported, "enum declaration");
                if exported {
                    decls.enums.insert(name);
                }
            }
        }
        _ => {}
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            visit(child, source, scope, decls);
        }
    }
}

/// A declaration is exported when it is wrapped in an `export` statement.
/// Under [`ExportScope::TopLevelAmbient`] a declaration sitting directly at
/// the module root also counts.
fn is_exported(node: &Node, scope: ExportScope) -> bool {
    match node.parent() {
        Some(parent) if parent.kind() == node_kinds::EXPORT_STATEMENT => true,
        Some(parent) if parent.kind() == node_kinds::PROGRAM => {
            scope == ExportScope::TopLevelAmbient
        }
        _ => false,
    }
}

/// Record an exported alias either as a union enum or a plain type.
///
/// All-or-nothing: a union containing even one non-string-literal member is
/// a plain type, never a partial union enum.
fn classify_alias(node: &Node, source: &str, name: String, decls: &mut ModuleDeclarations) {
    if let Some(value) = node.child_by_field_name("value") {
        if value.kind() == node_kinds::UNION_TYPE {
            if let Some(values) = literal_union_values(value, source) {
                decls.union_enums.push(UnionEnum::new(name, values));
                return;
            }
        }
    }
    decls.types.insert(name);
}

/// Collect the literal values of an all-string union, flattening the
/// grammar's nested left-associated union nodes. `None` when any member is
/// not a string literal.
fn literal_union_values(union: Node, source: &str) -> Option<IndexSet<String>> {
    let mut values = IndexSet::new();
    if collect_literal_members(union, source, &mut values) {
        Some(values)
    } else {
        None
    }
}

fn collect_literal_members(node: Node, source: &str, out: &mut IndexSet<String>) -> bool {
    for i in 0..node.named_child_count() {
        let Some(member) = node.named_child(i) else {
            continue;
        };
        // Skip comments and other extras inside the union.
        if member.is_extra() {
            continue;
        }
        match member.kind() {
            node_kinds::UNION_TYPE => {
                if !collect_literal_members(member, source, out) {
                    return false;
                }
            }
            node_kinds::LITERAL_TYPE => match string_literal_text(member, source) {
                Some(text) => {
                    out.insert(text);
                }
                None => return false,
            },
            _ => return false,
        }
    }
    true
}
