//! barrelsmith - TypeScript barrel/union module generator
//!
//! Given one or more TypeScript modules, barrelsmith extracts their exported
//! interface, type-alias and enum declarations and generates a single module
//! that re-exports a unified view of them: type names become cross-module
//! unions, enums become combined runtime lookup objects, and literal string
//! unions are materialized as both a type alias and a constant value map.
//!
//! Structure:
//! - `features/parsing` - declaration extraction from tree-sitter syntax trees
//! - `features/codegen` - the union module builder (the merging core)
//! - `usecases`         - read -> parse -> extract -> generate orchestration

pub mod errors;
pub mod features;
pub mod usecases;

pub use errors::{BarrelError, Result};
pub use features::codegen::{BuildArg, UnionModuleBuilder};
pub use features::parsing::{
    extract_declarations, ExportScope, ModuleDeclarations, TypeScriptParser, UnionEnum,
};
