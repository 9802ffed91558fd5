//! Error handling module for the loxt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Lexical errors found in the
//! scanned source are not errors of the tool; they are reported and counted
//! by the commands. Only failures that stop the tool end up here.

use thiserror::Error;

/// Main error type for the loxt CLI application.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finished but some of its inputs failed.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when the scanner's character source fails.
    #[error("Scan error: {0}")]
    Scan(#[from] loxc_lex::ScanError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LoxtError.
pub type Result<T> = std::result::Result<T, LoxtError>;
