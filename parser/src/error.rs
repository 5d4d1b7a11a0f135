//! Error types for worksheet configuration and output.
//!
//! Parsing itself never fails; these cover the edges around it: reading
//! configuration files and serializing results.

use thiserror::Error;

/// Errors that can occur outside the parse itself.
#[derive(Debug, Error)]
pub enum WorksheetError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`WorksheetError`].
pub type Result<T> = std::result::Result<T, WorksheetError>;
