//! Common types and utilities for loxt commands.
//!
//! This module provides the output format, the token/error emitter and the
//! scan loop shared by the `scan` and `repl` commands.

use std::io::{BufRead, Write};

use loxc_lex::{Literal, ScanError, Scanner, ScannerError, Token, TokenKind};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for tokens and errors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per token
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes.
pub mod exit_codes {
    /// Everything scanned without lexical errors.
    pub const SUCCESS: u8 = 0;

    /// The tool itself failed (bad arguments, unreadable input, ...).
    pub const FAILURE: u8 = 1;

    /// The input contained lexical errors.
    pub const DATA_ERROR: u8 = 65;
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when some inputs could not be scanned.
    pub const FILES_FAILED: &str = "file(s) failed to scan";
}

// ============================================================================
// Scan Results
// ============================================================================

/// Counters accumulated while scanning one or more inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of inputs (files, prompt lines) scanned.
    pub inputs: usize,
    /// Number of tokens produced.
    pub tokens: usize,
    /// Number of lexical errors reported.
    pub errors: usize,
}

impl ScanSummary {
    /// Adds another summary into this one.
    pub fn merge(&mut self, other: ScanSummary) {
        self.inputs += other.inputs;
        self.tokens += other.tokens;
        self.errors += other.errors;
    }
}

/// What a command hands back to `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Totals over everything the command scanned.
    pub summary: ScanSummary,
    /// Exit code the process should end with.
    pub exit_code: u8,
}

impl CommandOutcome {
    /// Outcome of a command that completed normally.
    pub fn success(summary: ScanSummary) -> Self {
        Self {
            summary,
            exit_code: exit_codes::SUCCESS,
        }
    }

    /// Outcome of a command whose input had lexical errors.
    pub fn data_error(summary: ScanSummary) -> Self {
        Self {
            summary,
            exit_code: exit_codes::DATA_ERROR,
        }
    }
}

// ============================================================================
// Emitter
// ============================================================================

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    lexeme: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let value = token.literal().map(|literal| match literal {
            Literal::Number(n) => number_value(*n),
            Literal::String(s) => serde_json::Value::from(s.as_str()),
        });
        Self {
            kind: token.kind().name(),
            line: token.line(),
            lexeme: token.lexeme(),
            value,
        }
    }
}

/// JSON has no infinity; literals too large for `f64` are written as `"inf"`.
fn number_value(n: f64) -> serde_json::Value {
    if n.is_finite() {
        serde_json::Value::from(n)
    } else {
        serde_json::Value::from(n.to_string())
    }
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    line: u32,
    column: u32,
    message: String,
}

/// Writes tokens to one stream and lexical errors to another.
pub struct Emitter<W, E> {
    out: W,
    err: E,
    format: OutputFormat,
    show_comments: bool,
}

impl<W: Write, E: Write> Emitter<W, E> {
    /// Create a new emitter.
    pub fn new(out: W, err: E, format: OutputFormat, show_comments: bool) -> Self {
        Self {
            out,
            err,
            format,
            show_comments,
        }
    }

    /// Print one token.
    pub fn token(&mut self, token: &Token) -> Result<()> {
        if token.kind() == TokenKind::Comment && !self.show_comments {
            return Ok(());
        }

        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", token)?,
            OutputFormat::Json => {
                let record = TokenRecord::from(token);
                writeln!(self.out, "{}", serde_json::to_string(&record)?)?;
            },
        }
        Ok(())
    }

    /// Print one lexical error, optionally prefixed with where it came from.
    pub fn error(&mut self, source: Option<&str>, error: &ScannerError) -> Result<()> {
        match (self.format, source) {
            (OutputFormat::Text, Some(source)) => writeln!(self.err, "{}: {}", source, error)?,
            (OutputFormat::Text, None) => writeln!(self.err, "{}", error)?,
            (OutputFormat::Json, source) => {
                let record = ErrorRecord {
                    source,
                    line: error.line,
                    column: error.column,
                    message: error.message(),
                };
                writeln!(self.err, "{}", serde_json::to_string(&record)?)?;
            },
        }
        Ok(())
    }

    /// Stream tokens are written to.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Stream errors are written to.
    pub fn err(&mut self) -> &mut E {
        &mut self.err
    }

    /// Flush both streams.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    /// Consume the emitter, returning the two streams.
    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

/// Scan one input to completion, printing every token and lexical error.
///
/// Lexical errors are counted and scanning continues, unless
/// `stop_on_error` is set. A failing reader aborts with an error.
pub fn scan_input<R, W, E>(
    reader: R,
    source: Option<&str>,
    emitter: &mut Emitter<W, E>,
    stop_on_error: bool,
) -> Result<ScanSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = ScanSummary {
        inputs: 1,
        ..ScanSummary::default()
    };

    for item in Scanner::new(reader) {
        match item {
            Ok(token) => {
                summary.tokens += 1;
                emitter.token(&token)?;
            },
            Err(ScanError::Lexical(error)) => {
                summary.errors += 1;
                emitter.error(source, &error)?;
                if stop_on_error {
                    tracing::debug!(line = error.line, "stopping at first lexical error");
                    break;
                }
            },
            Err(fatal) => return Err(fatal.into()),
        }
    }

    Ok(summary)
}
