//! Expression and condition parsing.
//!
//! Every arithmetic operator shares one precedence level and associates to
//! the left. Relational operators are only accepted between the two sides of
//! a [`Condition`].

use crate::ast::*;
use crate::error::{ParseError, Result};
use crate::Parser;
use itac_lex::TokenKind;

impl Parser {
    /// `Cond := Expr [RelOp Expr]`
    pub fn parse_condition(&mut self) -> Result<Condition> {
        let left = self.parse_expr()?;
        match self.current_operator() {
            Some(op) if op.is_relational() => {
                self.advance();
                let right = self.parse_expr()?;
                Ok(Condition::Compare { left, op, right })
            },
            _ => Ok(Condition::Single(left)),
        }
    }

    /// `Expr := Term (ArithOp Term)*`
    ///
    /// Each operator in the chain deepens the left-nested tree by one level.
    pub fn parse_expr(&mut self) -> Result<Expr> {
        let base = self.depth;
        let mut expr = self.parse_term()?;
        while let Some(op) = self.current_operator().filter(BinOp::is_arithmetic) {
            self.advance();
            self.enter()?;
            let right = self.parse_term()?;
            expr = Expr::binary(expr, op, right);
        }
        self.depth = base;
        Ok(expr)
    }

    /// `Term := NUM_INT | NUM_DEC | STRING | ID | vero | falso | ( Expr )`
    fn parse_term(&mut self) -> Result<Expr> {
        let token = self.current();
        let expr = match (token.kind(), token.lexeme()) {
            (TokenKind::NumInt, lexeme) => {
                // intero lowers to a 32-bit C++ int
                let value = lexeme.parse::<i32>().map_err(|_| ParseError::IntegerOverflow {
                    lexeme: lexeme.to_string(),
                    location: self.location(),
                })?;
                Expr::Literal(Literal::Int(i64::from(value)))
            },
            (TokenKind::NumDec, lexeme) => {
                let value = parse_decimal(lexeme).ok_or_else(|| ParseError::DecimalOverflow {
                    lexeme: lexeme.to_string(),
                    location: self.location(),
                })?;
                Expr::Literal(Literal::Decimal(value))
            },
            (TokenKind::String, lexeme) => Expr::Literal(Literal::Text(lexeme.to_string())),
            (TokenKind::Id, name) => Expr::Variable(name.to_string()),
            (TokenKind::Keyword, "vero") => Expr::Literal(Literal::Bool(true)),
            (TokenKind::Keyword, "falso") => Expr::Literal(Literal::Bool(false)),
            (TokenKind::Symbol, "(") => {
                self.advance();
                self.enter()?;
                let inner = self.parse_expr()?;
                self.expect_symbol(")")?;
                self.depth -= 1;
                return Ok(inner);
            },
            _ => return Err(self.error_unexpected("an expression")),
        };
        self.advance();
        Ok(expr)
    }

    /// The current token as an operator, if it is one.
    fn current_operator(&self) -> Option<BinOp> {
        let token = self.current();
        match token.kind() {
            TokenKind::Operator => BinOp::from_lexeme(token.lexeme()),
            _ => None,
        }
    }
}

/// Converts a comma-decimal lexeme (`3,14`) to its value.
///
/// `None` if the value is not a finite `f64`.
fn parse_decimal(lexeme: &str) -> Option<f64> {
    lexeme
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
