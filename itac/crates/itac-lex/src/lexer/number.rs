//! Numeric literal recognition.

use super::Match;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Decimal separator.
const DECIMAL_COMMA: char = ',';

/// Matches a digit run, optionally followed by a comma and a second digit
/// run (`3,14`). A comma not followed by a digit is left unconsumed and the
/// literal is an integer.
pub(super) fn recognize(mut cursor: Cursor<'_>) -> Match<'_> {
    if !cursor.current_char().is_ascii_digit() {
        return None;
    }

    let start = cursor.position();
    cursor.eat_while(|c| c.is_ascii_digit());

    if cursor.current_char() == DECIMAL_COMMA && cursor.peek_char(1).is_ascii_digit() {
        cursor.advance();
        cursor.eat_while(|c| c.is_ascii_digit());
        return Some((Token::new(TokenKind::NumDec, cursor.slice_from(start)), cursor));
    }

    Some((Token::new(TokenKind::NumInt, cursor.slice_from(start)), cursor))
}
