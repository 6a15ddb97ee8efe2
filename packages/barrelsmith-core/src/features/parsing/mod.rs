//! Parsing feature
//!
//! Responsible for turning TypeScript source text into a
//! [`ModuleDeclarations`] record.
//!
//! ## Structure
//! - `domain/`         - ModuleDeclarations, UnionEnum, ExportScope
//! - `infrastructure/` - TreeSitterParser wrapper, declaration extractor

pub mod domain;
pub mod infrastructure;

pub use domain::{ExportScope, ModuleDeclarations, UnionEnum};
pub use infrastructure::{extract_declarations, TypeScriptParser};
