//! CLI-specific error types
//!
//! Derivation failures are not CLI errors: a failed derivation still
//! produces a report on stdout and exits zero. Only I/O problems on the
//! way in or out surface here.

use std::io;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON envelope serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
