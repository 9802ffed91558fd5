//! Error types for the Lox scanner.
//!
//! A [`ScannerError`] is a recoverable lexical failure tied to a source
//! position. A [`ScanError`] is what a single `next_token` call can fail
//! with: either a lexical error, or an I/O failure from the underlying
//! reader, which is fatal.

use std::io;

use thiserror::Error;

/// What went wrong while classifying characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unexpected symbol: {0}")]
    UnexpectedSymbol(char),

    /// End of input inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
}

/// A lexical error at a source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {kind} ({line}:{column})")]
pub struct ScannerError {
    /// Line of the scanner when the error was detected (1-based).
    pub line: u32,
    /// Column of the scanner when the error was detected.
    pub column: u32,
    /// The kind of failure.
    pub kind: LexErrorKind,
}

impl ScannerError {
    /// Creates a new error at the given position.
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self { line, column, kind }
    }

    /// Returns the human-readable message, without position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Failure of a single token-producing call.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Recoverable lexical error; the scanner can be called again.
    #[error(transparent)]
    Lexical(#[from] ScannerError),

    /// The character source failed. Not retried by the scanner.
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Returns true if scanning cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScanError::Io(_))
    }

    /// Returns the lexical error, if this is one.
    pub fn as_lexical(&self) -> Option<&ScannerError> {
        match self {
            ScanError::Lexical(e) => Some(e),
            ScanError::Io(_) => None,
        }
    }
}

/// Result type alias for scanning operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
