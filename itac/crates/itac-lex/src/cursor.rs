//! Character cursor for traversing source text.
//!
//! The cursor is a small `Copy` value: a recognizer works on its own copy
//! and hands the advanced copy back only when it matches. A recognizer that
//! declines simply drops its copy, which leaves the lexer's cursor exactly
//! where it was.

/// A position in the source text with line/column bookkeeping.
///
/// # Example
///
/// ```
/// use itac_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
/// let saved = cursor;
/// cursor.eat_while(char::is_alphabetic);
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(saved.current_char(), 'v');
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The full source text.
    source: &'a str,

    /// Current byte offset.
    position: usize,

    /// Current line (1-based).
    line: u32,

    /// Current column (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead, or `'\0'` past the end.
    ///
    /// ```
    /// use itac_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("3,14");
    /// assert_eq!(cursor.peek_char(1), ',');
    /// assert_eq!(cursor.peek_char(9), '\0');
    /// ```
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Moves past the current character. No-op at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes the longest run of characters satisfying `pred` and returns it.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position;
        while !self.is_at_end() && pred(self.current_char()) {
            self.advance();
        }
        self.slice_from(start)
    }

    /// Skips whitespace, newlines included.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_separator);
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text between byte offset `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

/// Whitespace between tokens. Non-breaking spaces and NEL are not separators.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}')
}
