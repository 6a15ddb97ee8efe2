//! Infrastructure for the parsing feature.
//!
//! This is where the tree-sitter dependency lives.

pub mod extractor;
pub mod languages;
pub mod parser;

pub use extractor::extract_declarations;
pub use parser::TypeScriptParser;
