//! Identifier recognition.

use super::Match;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Matches a letter followed by letters, decimal digits and underscores.
///
/// Runs after the keyword recognizer, so it only sees words that are not
/// reserved, or words that continue past where a keyword would stop.
pub(super) fn recognize(mut cursor: Cursor<'_>) -> Match<'_> {
    if cursor.is_at_end() || !cursor.current_char().is_alphabetic() {
        return None;
    }

    let text = cursor.eat_while(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_');
    Some((Token::new(TokenKind::Id, text), cursor))
}
