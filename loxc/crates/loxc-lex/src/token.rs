//! Token definitions for the Lox scanner.
//!
//! A [`Token`] pairs a [`TokenKind`] with the line it started on and, for
//! the few kinds that need one, a payload. Which payload a token carries is
//! fixed by its kind: identifiers and comments keep their source text,
//! numbers and strings keep a typed [`Literal`], everything else keeps
//! nothing. The constructors are the only way to build a token, so that
//! pairing holds for every value in circulation.

use std::fmt;

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    Comment,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    False,
    Var,
    While,

    /// End of input.
    Eof,
}

/// Reserved words and the kinds they map to.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("fun", TokenKind::Fun),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Looks up a reserved word.
///
/// The match is exact, so `forest` is not `for`.
///
/// # Example
///
/// ```
/// use loxc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("forest"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "fun" => TokenKind::Fun,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

impl TokenKind {
    /// Returns the display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Minus => "Minus",
            TokenKind::Plus => "Plus",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Slash => "Slash",
            TokenKind::Star => "Star",
            TokenKind::Bang => "Bang",
            TokenKind::BangEqual => "BangEqual",
            TokenKind::Equal => "Equal",
            TokenKind::EqualEqual => "EqualEqual",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::Less => "Less",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::Comment => "Comment",
            TokenKind::Identifier => "Identifier",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::And => "And",
            TokenKind::Class => "Class",
            TokenKind::Else => "Else",
            TokenKind::Fun => "Fun",
            TokenKind::For => "For",
            TokenKind::If => "If",
            TokenKind::Nil => "Nil",
            TokenKind::Or => "Or",
            TokenKind::Print => "Print",
            TokenKind::Return => "Return",
            TokenKind::Super => "Super",
            TokenKind::This => "This",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Var => "Var",
            TokenKind::While => "While",
            TokenKind::Eof => "Eof",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::And && self <= TokenKind::While
    }

    /// Returns true if tokens of this kind keep their source text.
    pub fn has_lexeme(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Comment)
    }

    /// Returns true if tokens of this kind carry a literal value.
    pub fn has_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Value of a `Number` token.
    Number(f64),
    /// Contents of a `String` token, without the quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    None,
    Lexeme(String),
    Literal(Literal),
}

/// A classified piece of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    line: u32,
    payload: Payload,
}

impl Token {
    /// Creates a token for a kind that carries no payload.
    ///
    /// Passing `Identifier`, `Comment`, `String` or `Number` is a bug; use
    /// the dedicated constructors for those.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        debug_assert!(
            !kind.has_lexeme() && !kind.has_literal(),
            "{} tokens need a payload",
            kind
        );
        Self {
            kind,
            line,
            payload: Payload::None,
        }
    }

    /// Creates an `Identifier` token.
    pub fn identifier(name: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::Identifier,
            line,
            payload: Payload::Lexeme(name.into()),
        }
    }

    /// Creates a `Comment` token holding the text after `//`.
    pub fn comment(text: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::Comment,
            line,
            payload: Payload::Lexeme(text.into()),
        }
    }

    /// Creates a `String` literal token.
    pub fn string(value: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::String,
            line,
            payload: Payload::Literal(Literal::String(value.into())),
        }
    }

    /// Creates a `Number` literal token.
    pub fn number(value: f64, line: u32) -> Self {
        Self {
            kind: TokenKind::Number,
            line,
            payload: Payload::Literal(Literal::Number(value)),
        }
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the line the token started on (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the source text of an identifier or comment.
    pub fn lexeme(&self) -> Option<&str> {
        match &self.payload {
            Payload::Lexeme(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of a string or number literal.
    pub fn literal(&self) -> Option<&Literal> {
        match &self.payload {
            Payload::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns the numeric value of a `Number` token.
    pub fn as_number(&self) -> Option<f64> {
        match self.literal() {
            Some(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contents of a `String` token.
    pub fn as_str(&self) -> Option<&str> {
        match self.literal() {
            Some(Literal::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line {}", self.kind, self.line)?;
        match (&self.payload, self.kind) {
            (Payload::Lexeme(text), TokenKind::Comment) => write!(f, " comment text: \"{}\"", text),
            (Payload::Lexeme(text), _) => write!(f, " identifier: \"{}\"", text),
            (Payload::Literal(Literal::String(s)), _) => write!(f, " string literal: \"{}\"", s),
            (Payload::Literal(Literal::Number(n)), _) => write!(f, " number literal: {}", n),
            (Payload::None, _) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_matches_lookup() {
        for (text, kind) in KEYWORDS {
            assert_eq!(keyword_from_ident(text), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(keyword_from_ident("fo"), None);
        assert_eq!(keyword_from_ident("forest"), None);
        assert_eq!(keyword_from_ident("While"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_non_keywords() {
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Number.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn test_every_kind_has_distinct_name() {
        use std::collections::HashSet;

        let kinds = [
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Comment,
            TokenKind::Identifier,
            TokenKind::String,
            TokenKind::Number,
            TokenKind::Eof,
        ];
        let mut names: HashSet<&str> = kinds.iter().map(|k| k.name()).collect();
        for (_, kind) in KEYWORDS {
            assert!(names.insert(kind.name()), "duplicate name {}", kind);
        }
        assert_eq!(names.len(), kinds.len() + KEYWORDS.len());
        assert_eq!(TokenKind::False.name(), "False");
    }

    #[test]
    fn test_payload_follows_kind() {
        let ident = Token::identifier("x", 1);
        assert_eq!(ident.lexeme(), Some("x"));
        assert_eq!(ident.literal(), None);

        let number = Token::number(2.5, 1);
        assert_eq!(number.as_number(), Some(2.5));
        assert_eq!(number.lexeme(), None);

        let string = Token::string("hi", 3);
        assert_eq!(string.as_str(), Some("hi"));
        assert_eq!(string.line(), 3);

        let plus = Token::new(TokenKind::Plus, 1);
        assert_eq!(plus.lexeme(), None);
        assert_eq!(plus.literal(), None);
    }

    #[test]
    #[should_panic(expected = "need a payload")]
    #[cfg(debug_assertions)]
    fn test_payload_kind_without_payload_panics() {
        let _ = Token::new(TokenKind::Number, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::Plus, 1).to_string(), "Plus line 1");
        assert_eq!(
            Token::identifier("forest", 2).to_string(),
            "Identifier line 2 identifier: \"forest\""
        );
        assert_eq!(
            Token::comment(" note", 1).to_string(),
            "Comment line 1 comment text: \" note\""
        );
        assert_eq!(
            Token::string("a string", 1).to_string(),
            "String line 1 string literal: \"a string\""
        );
        assert_eq!(
            Token::number(12.5, 4).to_string(),
            "Number line 4 number literal: 12.5"
        );
    }
}
