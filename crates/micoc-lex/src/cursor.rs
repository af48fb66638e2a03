//! Character cursor for traversing source code.
//!
//! The cursor owns the position state of a scan: the byte offset of the
//! character under examination plus line/column counters for callers that
//! want to report positions. The source buffer itself is borrowed and never
//! mutated.

use crate::classify;

/// A cursor for traversing source code character by character.
///
/// Past the end of input, [`Cursor::current_char`] returns the `'\0'`
/// sentinel and [`Cursor::advance`] is a no-op, so a finished cursor can be
/// polled forever without moving.
///
/// # Example
///
/// ```
/// use micoc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 5;");
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the character under examination.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under examination, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character `offset` bytes ahead of the current position.
    ///
    /// Offset 1 is the single character of lookahead the lexer uses to tell
    /// `==` from `=` and `!=` from `!`.
    ///
    /// # Example
    ///
    /// ```
    /// use micoc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!=");
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (the only characters the language classifies)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8 input; such characters lex as Illegal
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at the end
    /// of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// Returns true if the character was matched and consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use micoc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips a maximal run of whitespace: space, tab, `\n`, `\r`.
    ///
    /// The language treats exactly these four bytes as insignificant; other
    /// Unicode whitespace lexes as Illegal like any unknown character.
    pub fn skip_whitespace(&mut self) {
        while classify::is_whitespace(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source slice from `start` up to the current position.
    ///
    /// This is how token literals are produced: record the position before
    /// consuming a lexeme, then slice once the run is over.
    ///
    /// # Example
    ///
    /// ```
    /// use micoc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
