//! Tree-sitter parser wrapper for TypeScript modules.

use std::fs;
use std::path::Path;

use tree_sitter::{Parser as TSParser, Tree};

use crate::errors::{BarrelError, Result};

/// Tree-sitter based TypeScript parser.
///
/// Parsers are cheap to construct and are not shared across threads; build
/// one per worker when extracting many files in parallel.
pub struct TypeScriptParser {
    parser: TSParser,
}

impl TypeScriptParser {
    pub fn new() -> Result<Self> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_typescript::language_typescript())
            .map_err(|e| BarrelError::parse(format!("failed to load TypeScript grammar: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse source text into a syntax tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| BarrelError::parse("tree-sitter produced no tree"))
    }

    /// Read a module from disk and parse it.
    pub fn parse_file(&mut self, path: &Path) -> Result<(String, Tree)> {
        let source = fs::read_to_string(path)?;
        let tree = self.parse(&source)?;
        Ok((source, tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_module() {
        let mut parser = TypeScriptParser::new().unwrap();
        let tree = parser.parse("export interface A { x: number; }").unwrap();
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut parser = TypeScriptParser::new().unwrap();
        let err = parser
            .parse_file(Path::new("definitely/not/here.ts"))
            .unwrap_err();
        assert!(matches!(err, BarrelError::Io(_)));
    }
}
