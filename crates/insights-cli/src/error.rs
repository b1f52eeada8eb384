//! Error types for the CLI application.
//!
//! Everything here is fatal to the run: per-email failures never surface as
//! a `CliError`, they stay inside the result records.

use insights_domain::RoleContextError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or invalid required settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Role-context file does not exist
    #[error("Context file not found: {0}")]
    ContextNotFound(PathBuf),

    /// Role-context document has the wrong shape
    #[error("Invalid role context: {0}")]
    Context(#[from] RoleContextError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
