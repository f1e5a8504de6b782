//! String literal recognition.

use super::Match;
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Matches a double-quoted literal and yields its content without the quotes.
///
/// A backslash makes the following character part of the literal, so `\"`
/// does not terminate it. Escapes are not interpreted: both characters are
/// kept verbatim in the content.
pub(super) fn recognize(mut cursor: Cursor<'_>) -> Result<Match<'_>> {
    if cursor.is_at_end() || cursor.current_char() != QUOTE {
        return Ok(None);
    }

    let open = cursor;
    cursor.advance();
    let start = cursor.position();

    loop {
        if cursor.is_at_end() {
            return Err(LexError::UnterminatedString {
                position: open.position(),
                line: open.line(),
            });
        }

        match cursor.current_char() {
            QUOTE => {
                let content = cursor.slice_from(start);
                cursor.advance();
                return Ok(Some((Token::new(TokenKind::String, content), cursor)));
            },
            ESCAPE => {
                cursor.advance();
                cursor.advance();
            },
            _ => cursor.advance(),
        }
    }
}
