//! Unicode utilities for the Lox scanner.
//!
//! Character classes used by the identifier scanner, plus the small amount
//! of UTF-8 framing the cursor needs to decode code points from a byte
//! stream.

use unicode_xid::UnicodeXID;

/// Checks if a character can start an identifier.
///
/// Letters start an identifier: `XID_Start` minus the letter-like numerals
/// (`Ⅻ`). Underscores and digits do not.
///
/// # Example
///
/// ```
/// use loxc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('Ⅻ'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    UnicodeXID::is_xid_start(c) && !c.is_numeric()
}

/// Checks if a character can continue an identifier.
///
/// Letters, decimal digits and underscores are allowed after the first
/// character.
///
/// # Example
///
/// ```
/// use loxc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// assert!(!is_ident_continue('²'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || is_ident_start(c) || is_decimal_digit(c)
}

/// Checks if a character is a decimal digit in any script (`٣`, `7`).
///
/// Superscripts, fractions and letter-like numerals are not decimal digits.
pub fn is_decimal_digit(c: char) -> bool {
    c.is_numeric() && UnicodeXID::is_xid_continue(c) && !c.is_alphabetic()
}

/// Checks if a character starts a number literal.
///
/// Only ASCII digits qualify, which keeps every accumulated literal
/// parseable as `f64`.
pub fn is_number_start(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns the length of the UTF-8 sequence introduced by `first`.
///
/// Returns `None` for bytes that can never start a well-formed sequence
/// (continuation bytes, overlong lead bytes `0xC0`/`0xC1`, and `0xF5..`).
pub fn utf8_sequence_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Checks if a byte is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
pub fn is_utf8_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}
