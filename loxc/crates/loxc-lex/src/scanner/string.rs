//! String literal lexing.

use std::io::BufRead;

use crate::error::{LexErrorKind, ScanResult};
use crate::token::Token;
use crate::Scanner;

impl<R: BufRead> Scanner<R> {
    /// Lexes a string literal after its opening quote.
    ///
    /// Everything up to the next `"` is taken verbatim, newlines included;
    /// there are no escape sequences. Running out of input first reports
    /// `unterminated string` at the end-of-input position.
    pub(crate) fn lex_string(&mut self) -> ScanResult<Token> {
        let mut value = String::new();

        loop {
            match self.cursor.advance()? {
                Some('"') => break,
                Some(c) => {
                    if c == '\n' {
                        self.cursor.bump_line();
                    }
                    value.push(c);
                },
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
            }
        }

        Ok(Token::string(value, self.token_line()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::TokenKind;
    use crate::Scanner;

    #[test]
    fn test_simple_string() {
        let mut scanner = Scanner::from_source("\"a string\"");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(token.as_str(), Some("a string"));
        assert_eq!(token.lexeme(), None);
    }

    #[test]
    fn test_empty_string() {
        let mut scanner = Scanner::from_source("\"\"");
        assert_eq!(scanner.next_token().unwrap().as_str(), Some(""));
    }

    #[test]
    fn test_multiline_string_counts_lines() {
        let mut scanner = Scanner::from_source("\"one\ntwo\" x");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.as_str(), Some("one\ntwo"));
        assert_eq!(token.line(), 1);
        assert_eq!(scanner.line(), 2);

        let ident = scanner.next_token().unwrap();
        assert_eq!(ident.line(), 2);
    }

    #[test]
    fn test_backslash_is_literal() {
        let mut scanner = Scanner::from_source(r#""a\nb""#);
        assert_eq!(scanner.next_token().unwrap().as_str(), Some("a\\nb"));
    }

    #[test]
    fn test_unterminated_string() {
        let mut scanner = Scanner::from_source("\"unterminated");
        let err = scanner.next_token().unwrap_err();
        let lexical = err.as_lexical().unwrap();
        assert_eq!(lexical.kind, LexErrorKind::UnterminatedString);
        assert_eq!(lexical.message(), "unterminated string");
        assert_eq!((lexical.line, lexical.column), (1, 13));
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_unterminated_string_reports_end_position() {
        let mut scanner = Scanner::from_source("x = \"open\nstill open");
        scanner.next_token().unwrap();
        scanner.next_token().unwrap();
        let err = scanner.next_token().unwrap_err();
        assert_eq!(err.as_lexical().unwrap().line, 2);
    }

    #[test]
    fn test_unicode_in_string() {
        let mut scanner = Scanner::from_source("\"héllo 😀\"");
        assert_eq!(scanner.next_token().unwrap().as_str(), Some("héllo 😀"));
    }
}
