//! Number literal lexing.
//!
//! This module handles lexing of decimal number literals. All numbers are
//! `f64`; there are no integer, exponent or prefixed forms.

use std::io::BufRead;

use crate::error::ScanResult;
use crate::token::Token;
use crate::Scanner;

impl<R: BufRead> Scanner<R> {
    /// Lexes a number literal whose first digit has been consumed.
    ///
    /// Accepts digits with at most one decimal point. A second `.` ends the
    /// literal and is left for the next token, so `12.34.56` is `12.34`,
    /// `.`, `56`. A trailing point is part of the literal (`12.` is `12.0`).
    pub(crate) fn lex_number(&mut self, first: char) -> ScanResult<Token> {
        let mut text = String::from(first);
        let mut seen_point = false;

        loop {
            match self.cursor.advance()? {
                Some(c) if c.is_ascii_digit() => text.push(c),
                Some('.') if !seen_point => {
                    seen_point = true;
                    text.push('.');
                },
                Some(_) => {
                    self.cursor.unread();
                    break;
                },
                None => break,
            }
        }

        // Only ASCII digits and a single point are ever accumulated.
        let value = text
            .parse::<f64>()
            .unwrap_or_else(|e| unreachable!("number literal {:?} did not parse: {}", text, e));

        Ok(Token::number(value, self.token_line()))
    }
}
