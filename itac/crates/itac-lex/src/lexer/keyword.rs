//! Reserved-word recognition.

use super::Match;
use crate::cursor::Cursor;
use crate::token::{is_reserved, Token, TokenKind, END_PREFIX};

/// Matches a maximal run of letters that is a reserved word.
///
/// `fine` alone is not reserved: it must be followed, after optional
/// whitespace, by a second run of letters such that the concatenation is
/// reserved (`fine prog` lexes to `fineprog`). Anything else declines,
/// including the bare word `fine`.
pub(super) fn recognize(mut cursor: Cursor<'_>) -> Match<'_> {
    let first = cursor.eat_while(char::is_alphabetic);
    if first.is_empty() {
        return None;
    }

    if first == END_PREFIX {
        cursor.skip_whitespace();
        let second = cursor.eat_while(char::is_alphabetic);
        if second.is_empty() {
            return None;
        }
        let combined = format!("{first}{second}");
        if !is_reserved(&combined) {
            return None;
        }
        return Some((Token::new(TokenKind::Keyword, combined), cursor));
    }

    if is_reserved(first) {
        Some((Token::new(TokenKind::Keyword, first), cursor))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(source: &str) -> Option<String> {
        recognize(Cursor::new(source)).map(|(token, _)| token.lexeme().to_string())
    }

    #[test]
    fn test_simple_keywords() {
        assert_eq!(kw("programma Demo"), Some("programma".to_string()));
        assert_eq!(kw("assegna"), Some("assegna".to_string()));
        assert_eq!(kw("vero."), Some("vero".to_string()));
    }

    #[test]
    fn test_joined_terminator() {
        assert_eq!(kw("fineprog"), Some("fineprog".to_string()));
    }

    #[test]
    fn test_split_terminators() {
        assert_eq!(kw("fine prog"), Some("fineprog".to_string()));
        assert_eq!(kw("fine\n\tse"), Some("finese".to_string()));
        assert_eq!(kw("fine mentre"), Some("finementre".to_string()));
        assert_eq!(kw("fine per"), Some("fineper".to_string()));
    }

    #[test]
    fn test_bare_fine_declines() {
        assert_eq!(kw("fine."), None);
        assert_eq!(kw("fine"), None);
        assert_eq!(kw("fine   "), None);
    }

    #[test]
    fn test_fine_with_unknown_suffix_declines() {
        assert_eq!(kw("fine gatto"), None);
    }

    #[test]
    fn test_reserved_but_unused_words() {
        assert_eq!(kw("e"), Some("e".to_string()));
        assert_eq!(kw("non"), Some("non".to_string()));
    }

    #[test]
    fn test_letters_only() {
        // `se1` starts with the keyword `se`; the digit is left for the next token
        let (token, after) = recognize(Cursor::new("se1")).unwrap();
        assert_eq!(token.lexeme(), "se");
        assert_eq!(after.current_char(), '1');
    }

    #[test]
    fn test_identifier_declines() {
        assert_eq!(kw("contatore"), None);
    }

    #[test]
    fn test_split_cursor_position() {
        let (_, after) = recognize(Cursor::new("fine  se x")).unwrap();
        assert_eq!(after.position(), 8);
    }
}
