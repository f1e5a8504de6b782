//! Edge case tests for itac-par

#[cfg(test)]
mod tests {
    use crate::*;
    use proptest::prelude::*;

    fn parse_source(source: &str) -> Result<Program> {
        parse(itac_lex::tokenize(source).unwrap())
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty token stream
    #[test]
    fn test_edge_empty_stream() {
        let err = parse(Vec::new()).unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref found, .. } if found.kind() == itac_lex::TokenKind::Eof));
    }

    /// EDGE CASE: Nested blocks close in order
    #[test]
    fn test_edge_nested_blocks() {
        let program = parse_source(
            "programma N
               mentre (vero) fai
                 se (x uguale 1) allora
                   per (i assegna 0. i minore 3. i assegna i piu 1) fai
                     interrompi.
                   fine per
                 altrimenti
                   scrivi(\"no\").
                 fine se
               fine mentre
             fine prog",
        )
        .unwrap();
        let Stmt::While(outer) = &program.block.statements[0] else {
            panic!("expected mentre");
        };
        let Stmt::If(inner) = &outer.block.statements[0] else {
            panic!("expected se");
        };
        assert!(matches!(inner.then_block.statements[0], Stmt::For(_)));
        assert!(inner.else_block.is_some());
    }

    /// EDGE CASE: Mismatched terminator
    #[test]
    fn test_edge_mismatched_terminator() {
        let err = parse_source("programma P se (vero) allora finementre fineprog").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "<KEYWORD, finese>"));
    }

    /// EDGE CASE: `altrimenti` outside a conditional ends the program block
    #[test]
    fn test_edge_stray_else() {
        assert!(parse_source("programma P altrimenti fineprog").is_err());
    }

    /// EDGE CASE: Empty branches and loop bodies
    #[test]
    fn test_edge_empty_bodies() {
        let program =
            parse_source("programma P se (vero) allora altrimenti finese mentre (falso) fai finementre fineprog")
                .unwrap();
        assert_eq!(program.block.statements.len(), 2);
    }

    /// EDGE CASE: Relational operator inside an expression position
    #[test]
    fn test_edge_relational_in_assignment() {
        let err = parse_source("programma P x assegna 1 uguale 2. fineprog").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "<SYMBOL, .>"));
    }

    /// EDGE CASE: Two relational operators in one condition
    #[test]
    fn test_edge_chained_comparison() {
        let err = parse_source("programma P se (a minore b minore c) allora finese fineprog").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "<SYMBOL, )>"));
    }

    /// EDGE CASE: Program name must be an identifier
    #[test]
    fn test_edge_keyword_as_program_name() {
        let err = parse_source("programma se fineprog").unwrap_err();
        assert!(matches!(err, ParseError::Expected { ref expected, .. } if expected == "<ID>"));
    }

    /// EDGE CASE: Deeply parenthesized term
    #[test]
    fn test_edge_deep_parentheses() {
        let source = format!("programma P x assegna {}1{}. fineprog", "(".repeat(64), ")".repeat(64));
        let program = parse_source(&source).unwrap();
        assert_eq!(
            program.block.statements[0],
            Stmt::Assign(Assignment {
                name: "x".into(),
                expr: Expr::Literal(Literal::Int(1)),
            })
        );
    }

    /// EDGE CASE: Parentheses right at the nesting limit
    #[test]
    fn test_edge_nesting_limit() {
        // the program block itself is the first level
        let inside = MAX_NESTING - 1;
        let source = format!("programma P x assegna {}1{}. fineprog", "(".repeat(inside), ")".repeat(inside));
        assert!(parse_source(&source).is_ok());

        let source = format!(
            "programma P x assegna {}1{}. fineprog",
            "(".repeat(inside + 1),
            ")".repeat(inside + 1)
        );
        let err = parse_source(&source).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { limit: MAX_NESTING, .. }));
    }

    /// EDGE CASE: Runaway parentheses fail instead of exhausting the stack
    #[test]
    fn test_edge_runaway_parentheses() {
        let source = format!(
            "programma P scrivi({}1{}). fineprog",
            "(".repeat(100_000),
            ")".repeat(100_000)
        );
        let err = parse_source(&source).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
        assert_eq!(err.diagnostic().category, itac_util::Category::Syntax);
    }

    /// EDGE CASE: Long operator chains count towards the limit
    #[test]
    fn test_edge_long_operator_chain() {
        let chain = |terms: usize| format!("programma P x assegna 1{}. fineprog", " piu 1".repeat(terms));
        assert!(parse_source(&chain(200)).is_ok());
        let err = parse_source(&chain(MAX_NESTING)).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { .. }));
    }

    /// EDGE CASE: Sibling expressions do not accumulate depth
    #[test]
    fn test_edge_depth_resets_between_statements() {
        let statement = format!("x assegna {}1{}. ", "(".repeat(200), ")".repeat(200));
        let source = format!("programma P {} fineprog", statement.repeat(4));
        assert_eq!(parse_source(&source).unwrap().block.statements.len(), 4);
    }

    // ==================== PROPERTIES ====================

    fn arithmetic_op() -> impl Strategy<Value = BinOp> {
        prop_oneof![
            Just(BinOp::Add),
            Just(BinOp::Sub),
            Just(BinOp::Mul),
            Just(BinOp::Div),
            Just(BinOp::Rem),
        ]
    }

    proptest! {
        /// Any operator chain nests strictly to the left.
        #[test]
        fn prop_chain_is_left_nested(
            first in 0i64..1000,
            rest in prop::collection::vec((arithmetic_op(), 0i64..1000), 0..12),
        ) {
            let mut source = format!("programma P x assegna {first}");
            let mut expected = Expr::Literal(Literal::Int(first));
            for (op, value) in &rest {
                source.push_str(&format!(" {} {}", op.lexeme(), value));
                expected = Expr::binary(expected, *op, Expr::Literal(Literal::Int(*value)));
            }
            source.push_str(". fineprog");

            let program = parse_source(&source).unwrap();
            prop_assert_eq!(
                &program.block.statements[0],
                &Stmt::Assign(Assignment { name: "x".into(), expr: expected })
            );
        }

        /// Parsing never panics on arbitrary token soup.
        #[test]
        fn prop_parser_never_panics(words in prop::collection::vec(
            prop::sample::select(vec![
                "programma", "fineprog", "var", "x", ":", "intero", ".", "(", ")",
                "se", "allora", "finese", "1", "piu", "uguale", "assegna", "scrivi", ",",
            ]),
            0..40,
        )) {
            let source = words.join(" ");
            if let Ok(tokens) = itac_lex::tokenize(&source) {
                let _ = parse(tokens);
            }
        }
    }
}
