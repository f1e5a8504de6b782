//! Statement parsing - declarations, assignment, I/O, se, mentre, per.

use crate::ast::*;
use crate::error::Result;
use crate::Parser;
use itac_lex::TokenKind;

impl Parser {
    /// Parses one statement.
    ///
    /// `Statement := VarDecl | Command`
    pub fn parse_stmt(&mut self) -> Result<Stmt> {
        let token = self.current();
        match (token.kind(), token.lexeme()) {
            (TokenKind::Keyword, "var" | "cost") => self.parse_var_decl().map(Stmt::VarDecl),
            (TokenKind::Keyword, "leggi") => self.parse_read(),
            (TokenKind::Keyword, "scrivi") => self.parse_write(),
            (TokenKind::Keyword, "se") => self.parse_if(),
            (TokenKind::Keyword, "mentre") => self.parse_while(),
            (TokenKind::Keyword, "per") => self.parse_for(),
            (TokenKind::Keyword, "ritorna") => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect_symbol(".")?;
                Ok(Stmt::Return(expr))
            },
            (TokenKind::Keyword, "interrompi") => {
                self.advance();
                self.expect_symbol(".")?;
                Ok(Stmt::Break)
            },
            (TokenKind::Id, _) => {
                let assignment = self.parse_assignment()?;
                self.expect_symbol(".")?;
                Ok(Stmt::Assign(assignment))
            },
            _ => Err(self.error_unexpected("a statement")),
        }
    }

    /// `VarDecl := (var | cost) ID : <type> [assegna Expr] .`
    ///
    /// A `cost` without an initializer is accepted here and rejected by the
    /// semantic analyzer.
    fn parse_var_decl(&mut self) -> Result<VarDecl> {
        let is_const = self.check_keyword("cost");
        self.advance();
        let name = self.expect_id()?;
        self.expect_symbol(":")?;
        let ty = self.parse_type()?;

        let init = if self.eat(TokenKind::Keyword, "assegna") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_symbol(".")?;

        Ok(VarDecl {
            is_const,
            name,
            ty,
            init,
        })
    }

    fn parse_type(&mut self) -> Result<PrimitiveType> {
        let token = self.current();
        let ty = match token.kind() {
            TokenKind::Keyword => PrimitiveType::from_keyword(token.lexeme()),
            _ => None,
        };
        match ty {
            Some(ty) => {
                self.advance();
                Ok(ty)
            },
            None => Err(self.error_expected("a type (intero, decimale, booleano, testo)")),
        }
    }

    /// `Assignment := ID assegna Expr`
    fn parse_assignment(&mut self) -> Result<Assignment> {
        let name = self.expect_id()?;
        self.expect_keyword("assegna")?;
        let expr = self.parse_expr()?;
        Ok(Assignment { name, expr })
    }

    /// `leggi ( ID ) .`
    fn parse_read(&mut self) -> Result<Stmt> {
        self.expect_keyword("leggi")?;
        self.expect_symbol("(")?;
        let name = self.expect_id()?;
        self.expect_symbol(")")?;
        self.expect_symbol(".")?;
        Ok(Stmt::Read(ReadStmt { name }))
    }

    /// `scrivi ( Expr (, Expr)* ) .`
    fn parse_write(&mut self) -> Result<Stmt> {
        self.expect_keyword("scrivi")?;
        self.expect_symbol("(")?;
        let mut expressions = vec![self.parse_expr()?];
        while self.eat(TokenKind::Symbol, ",") {
            expressions.push(self.parse_expr()?);
        }
        self.expect_symbol(")")?;
        self.expect_symbol(".")?;
        Ok(Stmt::Write(WriteStmt { expressions }))
    }

    /// `se ( Cond ) allora Block [altrimenti Block] finese`
    fn parse_if(&mut self) -> Result<Stmt> {
        self.expect_keyword("se")?;
        let cond = self.parse_paren_condition()?;
        self.expect_keyword("allora")?;
        let then_block = self.parse_block()?;
        let else_block = if self.eat(TokenKind::Keyword, "altrimenti") {
            Some(self.parse_block()?)
        } else {
            None
        };
        self.expect_keyword("finese")?;

        Ok(Stmt::If(IfStmt {
            cond,
            then_block,
            else_block,
        }))
    }

    /// `mentre ( Cond ) fai Block finementre`
    fn parse_while(&mut self) -> Result<Stmt> {
        self.expect_keyword("mentre")?;
        let cond = self.parse_paren_condition()?;
        self.expect_keyword("fai")?;
        let block = self.parse_block()?;
        self.expect_keyword("finementre")?;
        Ok(Stmt::While(WhileStmt { cond, block }))
    }

    /// `per ( Assignment . Cond . Assignment ) fai Block fineper`
    fn parse_for(&mut self) -> Result<Stmt> {
        self.expect_keyword("per")?;
        self.expect_symbol("(")?;
        let init = self.parse_assignment()?;
        self.expect_symbol(".")?;
        let cond = self.parse_condition()?;
        self.expect_symbol(".")?;
        let update = self.parse_assignment()?;
        self.expect_symbol(")")?;
        self.expect_keyword("fai")?;
        let block = self.parse_block()?;
        self.expect_keyword("fineper")?;

        Ok(Stmt::For(ForStmt {
            init,
            cond,
            update,
            block,
        }))
    }

    fn parse_paren_condition(&mut self) -> Result<Condition> {
        self.expect_symbol("(")?;
        let cond = self.parse_condition()?;
        self.expect_symbol(")")?;
        Ok(cond)
    }
}
