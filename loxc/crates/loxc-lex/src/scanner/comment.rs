//! Comment lexing.
//!
//! Line comments are emitted as tokens. The terminating newline is pushed
//! back so the whitespace loop stays the only place that counts lines.

use std::io::BufRead;

use crate::error::ScanResult;
use crate::token::Token;
use crate::Scanner;

impl<R: BufRead> Scanner<R> {
    /// Lexes the rest of a line comment after `//`.
    ///
    /// The text is kept verbatim up to, not including, the newline. A `\r`
    /// of a CRLF line ending stays in the text.
    pub(crate) fn lex_comment(&mut self) -> ScanResult<Token> {
        let mut text = String::new();

        while let Some(c) = self.cursor.advance()? {
            if c == '\n' {
                self.cursor.unread();
                break;
            }
            text.push(c);
        }

        Ok(Token::comment(text, self.token_line()))
    }
}
