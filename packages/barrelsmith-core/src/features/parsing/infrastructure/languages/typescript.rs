//! TypeScript-specific tree-sitter configuration.
//!
//! Node kind names match the tree-sitter-typescript grammar exactly.
//! Source: https://github.com/tree-sitter/tree-sitter-typescript/blob/master/common/define-grammar.js

use tree_sitter::Node;

/// TypeScript tree-sitter node kinds used by the extractor.
pub mod node_kinds {
    // Program structure
    pub const PROGRAM: &str = "program";

    // Declarations
    pub const INTERFACE_DECLARATION: &str = "interface_declaration";
    pub const TYPE_ALIAS_DECLARATION: &str = "type_alias_declaration";
    pub const ENUM_DECLARATION: &str = "enum_declaration";

    // Import/Export
    pub const EXPORT_STATEMENT: &str = "export_statement";

    // Types
    pub const UNION_TYPE: &str = "union_type";
    pub const LITERAL_TYPE: &str = "literal_type";

    // Literals
    pub const STRING: &str = "string";
}

/// Extract the source text covered by a node.
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Find the first named child of a specific kind.
pub fn find_named_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if child.kind() == kind {
                return Some(child);
            }
        }
    }
    None
}

/// Declaration name via the grammar's `name` field.
pub fn declaration_name(node: &Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .filter(|n| !n.is_empty())
}

/// Content of a `literal_type` node when it wraps a string literal.
///
/// Returns the text between the quotes; `None` for any other literal kind
/// (numbers, `null`, negated literals, template strings).
pub fn string_literal_text(literal: Node, source: &str) -> Option<String> {
    if literal.kind() != node_kinds::LITERAL_TYPE {
        return None;
    }
    let string = find_named_child_by_kind(&literal, node_kinds::STRING)?;

    // A string node's named children are its content fragments and escape
    // sequences; the quote tokens are anonymous. An empty string has none.
    let mut text = String::new();
    for i in 0..string.named_child_count() {
        if let Some(part) = string.named_child(i) {
            text.push_str(node_text(&part, source));
        }
    }
    Some(text)
}
