//! Error types for barrelsmith-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for barrelsmith operations
#[derive(Debug, Error)]
pub enum BarrelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A builder instance was asked to generate a second time
    #[error("module already generated, builder cannot be reused")]
    AlreadyBuilt,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BarrelError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        BarrelError::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        BarrelError::Config(msg.into())
    }
}

/// Result type alias for barrelsmith operations
pub type Result<T> = std::result::Result<T, BarrelError>;
