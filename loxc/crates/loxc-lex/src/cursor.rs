//! Character cursor over a buffered byte source.
//!
//! This module provides the `Cursor` struct which decodes UTF-8 code points
//! from any [`BufRead`] one at a time, keeps a single pushback slot for
//! lookahead, and tracks line/column information for error reporting.

use std::io::{self, BufRead};

use crate::unicode::{is_utf8_continuation, utf8_sequence_len};

/// A cursor for traversing source text one code point at a time.
///
/// Lookahead is built from [`advance`](Cursor::advance) followed by
/// [`unread`](Cursor::unread); the cursor holds at most one pushed-back
/// character.
///
/// Column counting is owned by the cursor: every consumed character bumps it
/// and every pushback undoes that. Line counting is driven by the scanner,
/// which decides which newlines count.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab".as_bytes());
///
/// assert_eq!(cursor.advance().unwrap(), Some('a'));
/// cursor.unread();
/// assert_eq!(cursor.advance().unwrap(), Some('a'));
/// assert_eq!(cursor.advance().unwrap(), Some('b'));
/// assert_eq!(cursor.advance().unwrap(), None);
/// ```
pub struct Cursor<R> {
    /// The underlying byte source.
    reader: R,

    /// Character pushed back by `unread`, returned by the next `advance`.
    pushback: Option<char>,

    /// The most recently consumed character, eligible for pushback.
    last: Option<char>,

    /// Current line number (1-based).
    line: u32,

    /// Current column number, in characters.
    column: u32,
}

impl<R: BufRead> Cursor<R> {
    /// Creates a new cursor positioned before the first character.
    ///
    /// The line starts at 1 and the column at 0, so the first consumed
    /// character sits at column 1.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushback: None,
            last: None,
            line: 1,
            column: 0,
        }
    }

    /// Consumes and returns the next character.
    ///
    /// Returns `Ok(None)` once the source is exhausted. A pushed-back
    /// character is returned before anything new is read.
    pub fn advance(&mut self) -> io::Result<Option<char>> {
        let next = match self.pushback.take() {
            Some(c) => Some(c),
            None => self.read_char()?,
        };

        self.last = next;
        if next.is_some() {
            self.column += 1;
        }

        Ok(next)
    }

    /// Pushes the most recently consumed character back onto the source.
    ///
    /// Does nothing if the last `advance` hit the end of input. Only one
    /// character can be pushed back between two reads.
    pub fn unread(&mut self) {
        debug_assert!(self.pushback.is_none(), "cursor pushback slot is full");

        if let Some(c) = self.last.take() {
            self.pushback = Some(c);
            self.column = self.column.saturating_sub(1);
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("x".as_bytes());
    /// assert_eq!(cursor.peek().unwrap(), Some('x'));
    /// assert_eq!(cursor.column(), 0);
    /// assert_eq!(cursor.advance().unwrap(), Some('x'));
    /// ```
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        let next = self.advance()?;
        self.unread();
        Ok(next)
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>".as_bytes());
    /// assert!(cursor.match_char('=').unwrap());
    /// assert!(!cursor.match_char('=').unwrap());
    /// assert_eq!(cursor.advance().unwrap(), Some('>'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> io::Result<bool> {
        match self.advance()? {
            Some(c) if c == expected => Ok(true),
            Some(_) => {
                self.unread();
                Ok(false)
            },
            None => Ok(false),
        }
    }

    /// Moves to the start of the next line.
    ///
    /// Called after the scanner consumes a line-terminating newline.
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Counts a newline that is part of a token without touching the column.
    pub fn bump_line(&mut self) {
        self.line += 1;
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Decodes one UTF-8 code point from the reader.
    ///
    /// Malformed sequences decode to U+FFFD; only the bytes that belong to
    /// the broken sequence are consumed.
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.peek_byte()? else {
            return Ok(None);
        };
        self.reader.consume(1);

        let Some(width) = utf8_sequence_len(first) else {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        };
        if width == 1 {
            return Ok(Some(char::from(first)));
        }

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b) if is_utf8_continuation(b) => {
                    *slot = b;
                    self.reader.consume(1);
                },
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        Ok(Some(decoded))
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
