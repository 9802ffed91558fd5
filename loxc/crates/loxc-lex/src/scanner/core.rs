//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, the whitespace loop and the
//! first-character dispatch.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexErrorKind, ScanError, ScanResult, ScannerError};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_start, is_number_start};

/// Scanner for Lox source text.
///
/// The scanner pulls characters from a [`Cursor`] and turns them into
/// [`Token`]s, one per call to [`next_token`](Scanner::next_token). A
/// lexical error is reported for the offending token only; the next call
/// picks up right after it.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::from_source("1+1");
///
/// assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Number);
/// assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Plus);
/// assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Number);
/// assert!(scanner.next_token().unwrap().is_eof());
/// ```
pub struct Scanner<R> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<R>,

    /// Line number where the current token starts (1-based).
    token_line: u32,

    /// Set once the iterator has yielded its last item.
    finished: bool,
}

impl<'a> Scanner<&'a [u8]> {
    /// Creates a scanner over an in-memory string.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new scanner reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
            token_line: 1,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the first character of the
    /// token.
    ///
    /// # Returns
    ///
    /// The next token, a token of kind [`TokenKind::Eof`] once the input is
    /// exhausted, or an error. [`ScanError::Lexical`] leaves the scanner
    /// usable; [`ScanError::Io`] means the reader failed.
    pub fn next_token(&mut self) -> ScanResult<Token> {
        let result = self.scan_token();

        match &result {
            Ok(token) => trace!(kind = %token.kind(), line = token.line(), "token"),
            Err(ScanError::Lexical(e)) => {
                debug!(line = e.line, column = e.column, "{}", e.kind)
            },
            Err(ScanError::Io(e)) => debug!(error = %e, "source read failed"),
        }

        result
    }

    fn scan_token(&mut self) -> ScanResult<Token> {
        let c = loop {
            match self.cursor.advance()? {
                Some(' ' | '\r' | '\t') => {},
                Some('\n') => self.cursor.next_line(),
                Some(c) => break c,
                None => {
                    self.token_line = self.cursor.line();
                    return Ok(self.token(TokenKind::Eof));
                },
            }
        };

        self.token_line = self.cursor.line();

        match c {
            '(' => Ok(self.token(TokenKind::LeftParen)),
            ')' => Ok(self.token(TokenKind::RightParen)),
            '{' => Ok(self.token(TokenKind::LeftBrace)),
            '}' => Ok(self.token(TokenKind::RightBrace)),
            ',' => Ok(self.token(TokenKind::Comma)),
            '.' => Ok(self.token(TokenKind::Dot)),
            '-' => Ok(self.token(TokenKind::Minus)),
            '+' => Ok(self.token(TokenKind::Plus)),
            ';' => Ok(self.token(TokenKind::Semicolon)),
            '*' => Ok(self.token(TokenKind::Star)),
            '/' => self.lex_slash(),
            '!' => self.lex_bang(),
            '=' => self.lex_equal(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => self.lex_string(),
            c if is_number_start(c) => self.lex_number(c),
            c if is_ident_start(c) => self.lex_identifier(c),
            c => Err(self.error(LexErrorKind::UnexpectedSymbol(c))),
        }
    }

    /// Builds a payload-free token on the current token's line.
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_line)
    }

    /// Line number where the current token starts.
    pub(crate) fn token_line(&self) -> u32 {
        self.token_line
    }

    /// Builds a lexical error at the current cursor position.
    pub(crate) fn error(&self, kind: LexErrorKind) -> ScanError {
        ScannerError::new(kind, self.cursor.line(), self.cursor.column()).into()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = ScanResult<Token>;

    /// Yields tokens and lexical errors until end of input.
    ///
    /// The end-of-input token itself is not yielded. After an I/O error the
    /// iterator is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            },
            Err(e) if e.is_fatal() => {
                self.finished = true;
                Some(Err(e))
            },
            other => Some(other),
        }
    }
}
