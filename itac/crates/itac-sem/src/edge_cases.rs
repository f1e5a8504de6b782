//! Edge case tests for itac-sem

#[cfg(test)]
mod tests {
    use crate::{analyze, Result, SemanticError, SymbolTable};
    use itac_par::{
        parse, BinOp, Block, Condition, Expr, IfStmt, Literal, PrimitiveType, Program, Stmt, WriteStmt,
    };

    fn check(body: &str) -> Result<SymbolTable> {
        let source = format!("programma E {body} fineprog");
        analyze(&parse(itac_lex::tokenize(&source).unwrap()).unwrap())
    }

    fn program(statements: Vec<Stmt>) -> Program {
        Program {
            name: "E".into(),
            block: Block { statements },
        }
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Empty program has an empty table
    #[test]
    fn test_edge_empty_program() {
        let symbols = check("").unwrap();
        assert!(symbols.is_empty());
    }

    /// EDGE CASE: Use before declaration, even if declared later
    #[test]
    fn test_edge_use_before_declaration() {
        let err = check("x assegna 1. var x : intero.").unwrap_err();
        assert!(matches!(err, SemanticError::NotDeclared { .. }));
    }

    /// EDGE CASE: A declaration may refer to itself in its initializer,
    /// since the name is recorded first
    #[test]
    fn test_edge_self_referencing_init() {
        assert!(check("var x : intero assegna x piu 1.").is_ok());
    }

    /// EDGE CASE: Redeclaration in the else branch
    #[test]
    fn test_edge_redeclaration_in_else() {
        let err = check("se (vero) allora var x : intero. altrimenti var x : intero. finese").unwrap_err();
        assert_eq!(err, SemanticError::AlreadyDeclared { name: "x".into() });
    }

    /// EDGE CASE: Redeclaring with a different type still errors
    #[test]
    fn test_edge_redeclaration_other_type() {
        assert!(check("var a : booleano. cost a : testo assegna \"t\".").is_err());
    }

    /// EDGE CASE: First error wins
    #[test]
    fn test_edge_first_error_wins() {
        let err = check("scrivi(a). var b : intero. var b : intero.").unwrap_err();
        assert!(matches!(err, SemanticError::NotDeclared { ref name, .. } if name == "a"));
    }

    /// EDGE CASE: Left operand is typed before the right one
    #[test]
    fn test_edge_left_operand_error_first() {
        let err = check("scrivi(a piu b).").unwrap_err();
        assert!(matches!(err, SemanticError::NotDeclared { ref name, .. } if name == "a"));
    }

    /// EDGE CASE: Mixed numeric comparison
    #[test]
    fn test_edge_int_decimal_comparison() {
        assert!(check("var i : intero. var d : decimale. se (i maggioreuguale d) allora finese").is_ok());
    }

    /// EDGE CASE: Boolean ordering comparison
    #[test]
    fn test_edge_boolean_ordering() {
        let err = check("se (vero minore falso) allora finese").unwrap_err();
        assert_eq!(
            err,
            SemanticError::InvalidComparisonOperator {
                op: BinOp::Lt,
                ty: PrimitiveType::Bool,
            }
        );
    }

    /// EDGE CASE: Concatenated text assigned to text
    #[test]
    fn test_edge_text_concatenation() {
        assert!(check("var s : testo assegna \"a\" piu \"b\" piu \"c\".").is_ok());
        assert!(check("var s : testo assegna \"a\" piu 1.").is_err());
    }

    /// EDGE CASE: Decimal modulo nested in a larger expression
    #[test]
    fn test_edge_nested_decimal_modulo() {
        let err = check("var r : decimale assegna 1 piu 2 % 1,5.").unwrap_err();
        assert_eq!(err, SemanticError::ModuloOnDecimal);
    }

    /// EDGE CASE: Break in a loop nested inside a conditional
    #[test]
    fn test_edge_break_in_nested_loop() {
        assert!(check("se (vero) allora mentre (vero) fai interrompi. finementre finese interrompi.").is_ok());
    }

    /// EDGE CASE: Arithmetic operator in the relational slot of a condition
    #[test]
    fn test_edge_internal_condition_shape() {
        let ast = program(vec![Stmt::If(IfStmt {
            cond: Condition::Compare {
                left: Expr::Literal(Literal::Int(1)),
                op: BinOp::Add,
                right: Expr::Literal(Literal::Int(2)),
            },
            then_block: Block::default(),
            else_block: None,
        })]);
        let err = analyze(&ast).unwrap_err();
        assert!(matches!(err, SemanticError::Internal { .. }));
        assert_eq!(err.category(), itac_util::Category::Internal);
    }

    /// EDGE CASE: Relational operator inside an arithmetic expression
    #[test]
    fn test_edge_relational_binary_expr() {
        let ast = program(vec![Stmt::Write(WriteStmt {
            expressions: vec![Expr::binary(
                Expr::Literal(Literal::Int(1)),
                BinOp::Eq,
                Expr::Literal(Literal::Int(1)),
            )],
        })]);
        let err = analyze(&ast).unwrap_err();
        assert_eq!(err, SemanticError::NonArithmeticOperator { op: BinOp::Eq });
        assert_eq!(err.diagnostic().category, itac_util::Category::Internal);
    }

    /// EDGE CASE: Independent runs do not share symbols
    #[test]
    fn test_edge_runs_are_independent() {
        assert!(check("var x : intero.").is_ok());
        assert!(check("var x : intero.").is_ok());
    }
}
