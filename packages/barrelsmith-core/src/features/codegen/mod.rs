//! Codegen feature
//!
//! The merging core: consumes per-module declaration records and generates
//! a single TypeScript module re-exporting a unified view of them.
//!
//! ## Structure
//! - `domain/`  - BuildArg, source normalization, identifier derivation
//! - `builder`  - UnionModuleBuilder

pub mod builder;
pub mod domain;

pub use builder::UnionModuleBuilder;
pub use domain::BuildArg;
