//! loxc-lex - Lexical Scanner for the Lox Scripting Language
//!
//! This crate turns a stream of source characters into classified tokens.
//! It is a standalone front end: it knows nothing about expression grammar
//! or statements, only about which characters form which token.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_source("var a = 12.5; // note");
//!
//! // Get tokens one at a time until end of input
//! loop {
//!     let token = scanner.next_token().unwrap();
//!     if token.is_eof() {
//!         break;
//!     }
//!     println!("{}", token);
//! }
//!
//! // Or iterate; lexical errors are yielded and scanning continues
//! let kinds: Vec<TokenKind> = Scanner::from_source("a @ b")
//!     .filter_map(Result::ok)
//!     .map(|t| t.kind())
//!     .collect();
//! assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Identifier]);
//! ```
//!
//! Any [`std::io::BufRead`] works as a source, so a file or stdin can be
//! scanned without reading it into memory first.
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, payloads and the keyword table
//! - [`scanner`] - Scanner implementation
//! - [`cursor`] - Character cursor with one-character pushback
//! - [`error`] - Lexical and I/O error types
//! - [`unicode`] - Character classes and UTF-8 framing
//!
//! # Token Categories
//!
//! - **Punctuation**: `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` `/`
//! - **Operators**: `!` `!=` `=` `==` `<` `<=` `>` `>=`
//! - **Comments**: `// ...` up to the end of the line, emitted as tokens
//! - **Literals**: identifiers, `"strings"` (no escapes, may span lines),
//!   numbers (`f64`, at most one decimal point)
//! - **Keywords**: `and class else fun for if nil or print return super
//!   this true false var while`
//!
//! # Errors
//!
//! Two lexical errors exist: `unexpected symbol` and `unterminated string`.
//! Both leave the scanner usable. A failing reader surfaces as
//! [`ScanError::Io`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexErrorKind, ScanError, ScanResult, ScannerError};
pub use scanner::Scanner;
pub use token::{keyword_from_ident, Literal, Token, TokenKind, KEYWORDS};
