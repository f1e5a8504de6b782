//! Single pre-order pass over the AST.

use crate::error::{Result, SemanticError};
use crate::symbols::{Symbol, SymbolTable};
use crate::types::{arithmetic_result, can_assign, check_comparison};
use itac_par::{
    Assignment, Block, Condition, Expr, ForStmt, IfStmt, PrimitiveType, Program, Stmt, VarDecl, WhileStmt,
};

/// State of one analysis run.
///
/// Created per compile and consumed by [`SemanticAnalyzer::analyze`].
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    /// Program-wide symbol table
    symbols: SymbolTable,

    /// Number of enclosing `mentre`/`per` bodies
    loop_depth: usize,
}

impl SemanticAnalyzer {
    /// Creates an analyzer with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the whole program and returns the final symbol table.
    /// Stops at the first violation.
    pub fn analyze(mut self, program: &Program) -> Result<SymbolTable> {
        self.visit_block(&program.block)?;
        tracing::debug!(
            program = %program.name,
            symbols = self.symbols.len(),
            "semantic analysis complete"
        );
        Ok(self.symbols)
    }

    /// Symbols declared so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    fn visit_block(&mut self, block: &Block) -> Result<()> {
        block.statements.iter().try_for_each(|stmt| self.visit_stmt(stmt))
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl(decl) => self.check_var_decl(decl),
            Stmt::Assign(assignment) => self.check_assignment(assignment),
            Stmt::Read(read) => self.lookup(&read.name, "leggi").map(|_| ()),
            Stmt::Write(write) => write.expressions.iter().try_for_each(|expr| self.type_of(expr).map(|_| ())),
            Stmt::If(stmt) => self.check_if(stmt),
            Stmt::While(stmt) => self.check_while(stmt),
            Stmt::For(stmt) => self.check_for(stmt),
            Stmt::Return(expr) => self.type_of(expr).map(|_| ()),
            Stmt::Break => {
                if self.loop_depth == 0 {
                    tracing::warn!("'interrompi' outside of a loop is accepted but has no loop to leave");
                }
                Ok(())
            },
        }
    }

    fn check_var_decl(&mut self, decl: &VarDecl) -> Result<()> {
        let symbol = Symbol {
            ty: decl.ty,
            constant: decl.is_const,
        };
        if self.symbols.insert(decl.name.as_str(), symbol).is_some() {
            return Err(SemanticError::AlreadyDeclared {
                name: decl.name.clone(),
            });
        }
        tracing::debug!(name = %decl.name, ty = %decl.ty, constant = decl.is_const, "declared");

        match &decl.init {
            None if decl.is_const => Err(SemanticError::ConstWithoutInit {
                name: decl.name.clone(),
            }),
            None => Ok(()),
            Some(init) => {
                let found = self.type_of(init)?;
                if can_assign(decl.ty, found) {
                    Ok(())
                } else {
                    Err(SemanticError::IncompatibleInit {
                        name: decl.name.clone(),
                        declared: decl.ty,
                        found,
                    })
                }
            },
        }
    }

    fn check_assignment(&self, assignment: &Assignment) -> Result<()> {
        let expected = self.lookup(&assignment.name, "assignment")?;
        let found = self.type_of(&assignment.expr)?;
        if can_assign(expected, found) {
            Ok(())
        } else {
            Err(SemanticError::IncompatibleAssign {
                name: assignment.name.clone(),
                expected,
                found,
            })
        }
    }

    /// Declared type of `name`. Constants resolve like variables.
    fn lookup(&self, name: &str, usage: &'static str) -> Result<PrimitiveType> {
        self.symbols
            .get(name)
            .map(|symbol| symbol.ty)
            .ok_or_else(|| SemanticError::NotDeclared {
                name: name.to_string(),
                usage,
            })
    }

    fn check_if(&mut self, stmt: &IfStmt) -> Result<()> {
        self.check_condition(&stmt.cond, "se")?;
        self.visit_block(&stmt.then_block)?;
        if let Some(else_block) = &stmt.else_block {
            self.visit_block(else_block)?;
        }
        Ok(())
    }

    fn check_while(&mut self, stmt: &WhileStmt) -> Result<()> {
        self.check_condition(&stmt.cond, "mentre")?;
        self.visit_loop_body(&stmt.block)
    }

    fn check_for(&mut self, stmt: &ForStmt) -> Result<()> {
        self.check_assignment(&stmt.init)?;
        self.check_condition(&stmt.cond, "per")?;
        self.check_assignment(&stmt.update)?;
        self.visit_loop_body(&stmt.block)
    }

    fn visit_loop_body(&mut self, block: &Block) -> Result<()> {
        self.loop_depth += 1;
        let result = self.visit_block(block);
        self.loop_depth -= 1;
        result
    }

    /// Checks that a condition is boolean.
    pub fn check_condition(&self, cond: &Condition, statement: &'static str) -> Result<()> {
        match cond {
            Condition::Single(expr) => {
                let found = self.type_of(expr)?;
                if found == PrimitiveType::Bool {
                    Ok(())
                } else {
                    Err(SemanticError::NonBooleanCondition { statement, found })
                }
            },
            Condition::Compare { left, op, right } => {
                if !op.is_relational() {
                    return Err(SemanticError::Internal {
                        message: format!("arithmetic operator '{}' in the relational slot of a condition", op),
                    });
                }
                let left = self.type_of(left)?;
                let right = self.type_of(right)?;
                check_comparison(*op, left, right)
            },
        }
    }

    /// Infers the type of an expression.
    pub fn type_of(&self, expr: &Expr) -> Result<PrimitiveType> {
        match expr {
            Expr::Literal(literal) => Ok(literal.ty()),
            Expr::Variable(name) => self.lookup(name, "an expression"),
            Expr::Binary(binary) => {
                let left = self.type_of(&binary.left)?;
                let right = self.type_of(&binary.right)?;
                arithmetic_result(binary.op, left, right)
            },
        }
    }
}
