//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps core
//! errors to exit codes and user-facing messages.

use asb_core::AbsorbError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The absorb pass rejected the collection.
    #[error("{0}")]
    Absorb(#[from] AbsorbError),

    /// Input could not be parsed as a descriptor collection.
    #[error("Invalid input: {0}")]
    Parse(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Invalid arguments (reported by clap before we get here)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Absorb(_) | CliError::Parse(_) => 65, // EX_DATAERR
            CliError::Io(_) => 74,                          // EX_IOERR
            CliError::Config(_) => 78,                      // EX_CONFIG
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            CliError::Io(err.to_string())
        } else {
            CliError::Parse(err.to_string())
        }
    }
}
