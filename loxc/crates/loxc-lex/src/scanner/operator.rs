//! Operator lexing.
//!
//! This module handles the operators that need one character of lookahead.
//! The leading character has already been consumed by the dispatcher.

use std::io::BufRead;

use crate::error::ScanResult;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<R: BufRead> Scanner<R> {
    /// Lexes bang or bang-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> ScanResult<Token> {
        self.lex_with_equal(TokenKind::Bang, TokenKind::BangEqual)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> ScanResult<Token> {
        self.lex_with_equal(TokenKind::Equal, TokenKind::EqualEqual)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> ScanResult<Token> {
        self.lex_with_equal(TokenKind::Less, TokenKind::LessEqual)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> ScanResult<Token> {
        self.lex_with_equal(TokenKind::Greater, TokenKind::GreaterEqual)
    }

    /// Lexes slash or the start of a line comment.
    ///
    /// Handles: `/`, `//`
    pub(crate) fn lex_slash(&mut self) -> ScanResult<Token> {
        if self.cursor.match_char('/')? {
            self.lex_comment()
        } else {
            Ok(self.token(TokenKind::Slash))
        }
    }

    fn lex_with_equal(&mut self, single: TokenKind, double: TokenKind) -> ScanResult<Token> {
        let kind = if self.cursor.match_char('=')? {
            double
        } else {
            single
        };
        Ok(self.token(kind))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Scanner;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::from_source(source)
            .map(|t| t.unwrap().kind())
            .collect()
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("!= == <= >="),
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
            ]
        );
    }

    #[test]
    fn test_one_character_operators() {
        assert_eq!(
            kinds("! = < > /"),
            vec![
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Slash,
            ]
        );
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(kinds("!"), vec![TokenKind::Bang]);
        assert_eq!(kinds(">"), vec![TokenKind::Greater]);
        assert_eq!(kinds("/"), vec![TokenKind::Slash]);
    }

    #[test]
    fn test_lookahead_is_left_for_next_token() {
        assert_eq!(kinds("!x"), vec![TokenKind::Bang, TokenKind::Identifier]);
        assert_eq!(kinds("<("), vec![TokenKind::Less, TokenKind::LeftParen]);
    }

    #[test]
    fn test_equal_then_less_is_two_tokens() {
        assert_eq!(kinds("=<"), vec![TokenKind::Equal, TokenKind::Less]);
    }

    #[test]
    fn test_triple_equal() {
        assert_eq!(kinds("==="), vec![TokenKind::EqualEqual, TokenKind::Equal]);
    }

    #[test]
    fn test_slash_followed_by_space() {
        assert_eq!(
            kinds("4 / 2"),
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number]
        );
    }
}
