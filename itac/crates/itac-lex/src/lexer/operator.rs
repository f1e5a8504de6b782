//! Operator recognition: `%` and the spelled-out operator words.

use super::Match;
use crate::cursor::Cursor;
use crate::token::{is_operator_word, Token, TokenKind, SYMBOLIC_OPERATOR};

/// Matches `%`, or a maximal run of letters that is exactly one of the
/// operator words. `minoreuguale` is one word; `minore uguale` is two
/// operators.
pub(super) fn recognize(mut cursor: Cursor<'_>) -> Match<'_> {
    if cursor.current_char() == SYMBOLIC_OPERATOR {
        cursor.advance();
        return Some((Token::new(TokenKind::Operator, SYMBOLIC_OPERATOR.to_string()), cursor));
    }

    let word = cursor.eat_while(char::is_alphabetic);
    if is_operator_word(word) {
        Some((Token::new(TokenKind::Operator, word), cursor))
    } else {
        None
    }
}
