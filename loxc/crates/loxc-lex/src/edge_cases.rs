//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{LexErrorKind, ScanError, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Result<Token, ScanError>> {
        Scanner::from_source(source).collect()
    }

    fn lex_tokens(source: &str) -> Vec<Token> {
        lex_all(source).into_iter().map(|t| t.unwrap()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_tokens("x"), vec![Token::identifier("x", 1)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_tokens(&format!("var {} = 1;", name));
        assert_eq!(tokens[1], Token::identifier(name, 1));
    }

    #[test]
    fn test_edge_error_column_after_newline() {
        let items = lex_all("\n  $");
        let err = items[0].as_ref().unwrap_err().as_lexical().unwrap().clone();
        assert_eq!(err.kind, LexErrorKind::UnexpectedSymbol('$'));
        assert_eq!((err.line, err.column), (2, 4));
    }

    #[test]
    fn test_edge_consecutive_errors() {
        let items = lex_all("#$%");
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|r| r.is_err()));
    }

    #[test]
    fn test_edge_unexpected_non_ascii_digit() {
        let items = lex_all("٣");
        assert_eq!(
            items[0].as_ref().unwrap_err().as_lexical().unwrap().kind,
            LexErrorKind::UnexpectedSymbol('٣')
        );
    }

    #[test]
    fn test_edge_invalid_utf8_is_unexpected_symbol() {
        let bytes: &[u8] = &[b'a', b' ', 0xFF, b' ', b'b'];
        let items: Vec<_> = Scanner::new(bytes).collect();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[1].as_ref().unwrap_err().as_lexical().unwrap().kind,
            LexErrorKind::UnexpectedSymbol(char::REPLACEMENT_CHARACTER)
        );
        assert_eq!(items[2].as_ref().unwrap().lexeme(), Some("b"));
    }

    #[test]
    fn test_edge_string_then_unterminated() {
        let items = lex_all("\"ok\" \"nope");
        assert_eq!(items[0].as_ref().unwrap().as_str(), Some("ok"));
        assert!(items[1].is_err());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_edge_number_dot_identifier() {
        let kinds: Vec<_> = lex_tokens("1.2.foo").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_comment_after_slash() {
        let kinds: Vec<_> = lex_tokens("a / b // c").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Comment,
            ]
        );
    }

    #[test]
    fn test_edge_no_space_operators() {
        let kinds: Vec<_> = lex_tokens("a<=b!=c").iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::LessEqual,
                TokenKind::Identifier,
                TokenKind::BangEqual,
                TokenKind::Identifier,
            ]
        );
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_whitespace_only() {
        use proptest::prelude::*;

        proptest!(|(input in "[ \t\r\n]{0,64}")| {
            let mut scanner = Scanner::from_source(&input);
            prop_assert!(scanner.next_token().unwrap().is_eof());
            let newlines = input.matches('\n').count() as u32;
            prop_assert_eq!(scanner.line(), 1 + newlines);
        });
    }

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z][a-zA-Z0-9_]{0,40}")| {
            let tokens = lex_tokens(&input);
            prop_assert_eq!(tokens.len(), 1);
            match crate::keyword_from_ident(&input) {
                Some(kind) => {
                    prop_assert_eq!(tokens[0].kind(), kind);
                },
                None => {
                    prop_assert_eq!(tokens[0].lexeme(), Some(input.as_str()));
                },
            }
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_number_strings() {
        use proptest::prelude::*;

        proptest!(|(int in "[0-9]{1,12}", frac in "[0-9]{0,8}")| {
            let input = format!("{}.{}", int, frac);
            let tokens = lex_tokens(&input);
            prop_assert_eq!(tokens.len(), 1);
            let expected: f64 = input.parse().unwrap();
            prop_assert_eq!(tokens[0].as_number(), Some(expected));
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"]{0,100}")| {
            let source = format!("\"{}\"", input);
            let tokens = lex_tokens(&source);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].as_str(), Some(input.as_str()));
        });
    }

    #[test]
    fn test_property_scanner_always_terminates() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,80}")| {
            let items = lex_all(&input);
            // Every item consumes at least one character.
            prop_assert!(items.len() <= input.chars().count());
        });
    }
}
