//! Application use cases.

pub mod generate_barrel;

pub use generate_barrel::{BarrelOptions, GenerateBarrelUseCase, SourceSpec};
