//! Edge case tests for itac-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Token, TokenKind};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        let tokens = lex_all("  \n\t \r\n ");
        assert_eq!(tokens, vec![Token::eof()]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = lex_all(&name);
        assert!(tokens[0].is(TokenKind::Id, &name));
    }

    #[test]
    fn test_edge_fine_across_lines() {
        let tokens = lex_all("fine\n\n   mentre");
        assert!(tokens[0].is(TokenKind::Keyword, "finementre"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_edge_fine_followed_by_identifier() {
        // `fine x` is not a compound keyword: two identifiers
        let tokens = lex_all("fine x");
        assert!(tokens[0].is(TokenKind::Id, "fine"));
        assert!(tokens[1].is(TokenKind::Id, "x"));
    }

    #[test]
    fn test_edge_fine_followed_by_operator_word() {
        let tokens = lex_all("fine piu");
        assert!(tokens[0].is(TokenKind::Id, "fine"));
        assert!(tokens[1].is(TokenKind::Operator, "piu"));
    }

    #[test]
    fn test_edge_finex_identifier() {
        let tokens = lex_all("finex");
        assert!(tokens[0].is(TokenKind::Id, "finex"));
    }

    #[test]
    fn test_edge_adjacent_symbols() {
        let tokens = lex_all("()).,:");
        assert_eq!(tokens.len(), 7);
        assert!(tokens.iter().take(6).all(|t| t.kind() == TokenKind::Symbol));
    }

    #[test]
    fn test_edge_decimal_then_dot() {
        let tokens = lex_all("2,5.");
        assert!(tokens[0].is(TokenKind::NumDec, "2,5"));
        assert!(tokens[1].is(TokenKind::Symbol, "."));
    }

    #[test]
    fn test_edge_percent_without_spaces() {
        let tokens = lex_all("a%b");
        assert!(tokens[0].is(TokenKind::Id, "a"));
        assert!(tokens[1].is(TokenKind::Operator, "%"));
        assert!(tokens[2].is(TokenKind::Id, "b"));
    }

    #[test]
    fn test_edge_string_with_keywords_inside() {
        let tokens = lex_all("\"se allora fineprog\"");
        assert!(tokens[0].is(TokenKind::String, "se allora fineprog"));
    }

    #[test]
    fn test_edge_error_line_tracking() {
        let err = tokenize("programma P\nvar x : intero.\n  @").unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedChar { found: '@', line: 3, column: 3, .. }));
    }

    /// EDGE CASE: Non-breaking space is not a separator
    #[test]
    fn test_edge_non_breaking_space() {
        let err = tokenize("var\u{a0}x").unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedChar { found: '\u{a0}', position: 3, .. }));
    }

    /// EDGE CASE: Superscript digit ends an identifier
    #[test]
    fn test_edge_superscript_after_identifier() {
        let err = tokenize("x\u{b2}").unwrap_err();
        assert!(matches!(err, LexError::UnrecognizedChar { found: '\u{b2}', .. }));
    }

    // ==================== PROPERTIES ====================

    proptest! {
        #[test]
        fn prop_never_panics(source in "\\PC{0,64}") {
            let _ = tokenize(&source);
        }

        #[test]
        fn prop_success_ends_with_single_eof(source in "[a-z0-9 ,.():%\"]{0,48}") {
            if let Ok(tokens) = tokenize(&source) {
                prop_assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::Eof));
                prop_assert_eq!(tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count(), 1);
            }
        }

        #[test]
        fn prop_integer_literal_roundtrip(n in 0u64..u64::MAX) {
            let text = n.to_string();
            let tokens = tokenize(&text).unwrap();
            prop_assert!(tokens[0].is(TokenKind::NumInt, &text));
        }

        #[test]
        fn prop_identifiers_lex_as_single_token(name in "[a-z][a-z0-9_]{0,12}") {
            // reserved words, operator words and keyword-prefixed names split,
            // reclassify or stop at '_'; every other name is one identifier
            if let Ok(tokens) = tokenize(&name) {
                if tokens.len() == 2 && tokens[0].kind() == TokenKind::Id {
                    prop_assert_eq!(tokens[0].lexeme(), name.as_str());
                }
            }
        }
    }
}
