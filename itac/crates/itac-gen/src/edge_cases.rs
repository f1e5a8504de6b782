//! Edge case tests for itac-gen

#[cfg(test)]
mod tests {
    use crate::*;
    use itac_par::{BinOp, Block, IfStmt, Literal, WriteStmt};

    fn program(statements: Vec<Stmt>) -> Program {
        Program {
            name: "E".into(),
            block: Block { statements },
        }
    }

    fn int(value: i64) -> Expr {
        Expr::Literal(Literal::Int(value))
    }

    // ==================== EDGE CASES ====================

    /// EDGE CASE: Relational operator inside a binary expression
    #[test]
    fn test_edge_relational_binary_is_internal() {
        let ast = program(vec![Stmt::Write(WriteStmt {
            expressions: vec![Expr::binary(int(1), BinOp::Lt, int(2))],
        })]);
        let err = generate(&ast).unwrap_err();
        assert!(matches!(err, CodeGenError::Internal(ref msg) if msg.contains("minore")));
        assert_eq!(err.diagnostic().category, itac_util::Category::Internal);
    }

    /// EDGE CASE: Arithmetic operator used as a comparison
    #[test]
    fn test_edge_arithmetic_condition_is_internal() {
        let ast = program(vec![Stmt::If(IfStmt {
            cond: Condition::Compare {
                left: int(1),
                op: BinOp::Mul,
                right: int(2),
            },
            then_block: Block::default(),
            else_block: None,
        })]);
        assert!(matches!(generate(&ast), Err(CodeGenError::Internal(_))));
    }

    /// EDGE CASE: Deep nesting indents one level per block
    #[test]
    fn test_edge_deep_nesting() {
        let mut block = Block {
            statements: vec![Stmt::Break],
        };
        for _ in 0..3 {
            block = Block {
                statements: vec![Stmt::If(IfStmt {
                    cond: Condition::Single(Expr::Literal(Literal::Bool(true))),
                    then_block: block,
                    else_block: None,
                })],
            };
        }
        let cpp = generate(&program(block.statements)).unwrap();
        assert!(cpp.contains(&format!("{}break;\n", " ".repeat(16))));
    }

    /// EDGE CASE: Empty branches still emit braces
    #[test]
    fn test_edge_empty_branches() {
        let ast = program(vec![Stmt::If(IfStmt {
            cond: Condition::Single(Expr::var("b")),
            then_block: Block::default(),
            else_block: Some(Block::default()),
        })]);
        let cpp = generate(&ast).unwrap();
        assert!(cpp.contains("    if (b) {\n    } else {\n    }\n"));
    }

    /// EDGE CASE: Nested parentheses in source collapse to explicit grouping
    #[test]
    fn test_edge_right_grouping() {
        let expr = Expr::binary(int(2), BinOp::Add, Expr::binary(int(3), BinOp::Mul, int(4)));
        let generator = CodeGenerator::new(CodegenOptions::default());
        assert_eq!(generator.gen_expr(&expr).unwrap(), "(2 + (3 * 4))");
    }

    /// EDGE CASE: Negative-looking and large literals
    #[test]
    fn test_edge_literal_spelling() {
        let generator = CodeGenerator::new(CodegenOptions::default());
        assert_eq!(generator.gen_expr(&int(i64::MAX)).unwrap(), i64::MAX.to_string());
        assert_eq!(generator.gen_expr(&Expr::Literal(Literal::Decimal(10.0))).unwrap(), "10.0");
        assert_eq!(generator.gen_expr(&Expr::Literal(Literal::Text(String::new()))).unwrap(), "\"\"");
    }

    /// EDGE CASE: Single-form condition over a boolean variable
    #[test]
    fn test_edge_single_condition() {
        let generator = CodeGenerator::new(CodegenOptions::default());
        let cond = Condition::Single(Expr::var("attivo"));
        assert_eq!(generator.gen_cond(&cond).unwrap(), "attivo");
    }
}
