//! Per-grammar node kind tables and traversal helpers.

pub mod typescript;
