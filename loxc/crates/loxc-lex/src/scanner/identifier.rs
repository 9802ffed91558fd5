//! Identifier and keyword lexing.

use std::io::BufRead;

use crate::error::ScanResult;
use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_ident_continue;
use crate::Scanner;

impl<R: BufRead> Scanner<R> {
    /// Lexes an identifier or keyword whose first letter has been consumed.
    ///
    /// The whole word is read before the keyword lookup, so `forest` stays
    /// one identifier.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g., `TokenKind::While`) or an `Identifier`
    /// carrying the text.
    pub(crate) fn lex_identifier(&mut self, first: char) -> ScanResult<Token> {
        let mut text = String::from(first);

        while let Some(c) = self.cursor.peek()? {
            if !is_ident_continue(c) {
                break;
            }
            text.push(c);
            self.cursor.advance()?;
        }

        Ok(match keyword_from_ident(&text) {
            Some(kind) => self.token(kind),
            None => Token::identifier(text, self.token_line()),
        })
    }
}
