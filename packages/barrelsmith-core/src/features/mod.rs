//! Vertical feature slices.

pub mod codegen;
pub mod parsing;
