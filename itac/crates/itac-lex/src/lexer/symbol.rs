//! Punctuation recognition.

use super::Match;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, SYMBOLS};

/// Matches one of `. ( ) , :`.
pub(super) fn recognize(mut cursor: Cursor<'_>) -> Match<'_> {
    let c = cursor.current_char();
    if cursor.is_at_end() || !SYMBOLS.contains(&c) {
        return None;
    }
    cursor.advance();
    Some((Token::new(TokenKind::Symbol, c.to_string()), cursor))
}
