//! itac-gen - C++ Code Generator
//!
//! Lowers a checked [`Program`] straight to C++ source text. Statements map
//! one to one; the whole program becomes the body of `int main()`.
//!
//! | source                         | C++                                   |
//! |--------------------------------|---------------------------------------|
//! | `var x : intero assegna 1.`    | `int x = 1;`                          |
//! | `cost k : testo assegna "a".`  | `const string k = "a";`               |
//! | `x assegna a piu b.`           | `x = (a + b);`                        |
//! | `leggi(x).`                    | `cin >> x;`                           |
//! | `scrivi(a, b).`                | `cout << a << b << endl;`             |
//! | `se (c) allora ... finese`     | `if (c) { ... }`                      |
//! | `mentre (c) fai ... finementre`| `while (c) { ... }`                   |
//! | `per (i assegna 0. c. i assegna e) fai ... fineper` | `for (i = 0; c; i = e) { ... }` |
//! | `ritorna e.` / `interrompi.`   | `return e;` / `break;`                |
//!
//! Every binary expression is parenthesized, so the generated code keeps the
//! source's flat left-to-right grouping.
//!
//! # Example
//!
//! ```
//! let tokens = itac_lex::tokenize("programma P scrivi(2 piu 3 moltiplica 4). fineprog").unwrap();
//! let program = itac_par::parse(tokens).unwrap();
//! let cpp = itac_gen::generate(&program).unwrap();
//! assert!(cpp.contains("    cout << ((2 + 3) * 4) << endl;\n"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod types;

#[cfg(test)]
mod edge_cases;

pub use error::{CodeGenError, Result};
pub use types::{map_op, map_type};

use itac_par::{Block, Condition, Expr, Literal, Program, Stmt};

/// Headers included by default.
pub const DEFAULT_INCLUDES: &[&str] = &["iostream", "string", "vector", "stdexcept"];

/// Output layout knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Headers emitted as `#include <...>`, in order
    pub includes: Vec<String>,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Single-pass C++ emitter.
pub struct CodeGenerator {
    /// Layout options
    options: CodegenOptions,
    /// Text emitted so far
    output: String,
    /// Current nesting level
    indent: usize,
}

impl CodeGenerator {
    /// Creates a generator with the given layout.
    pub fn new(options: CodegenOptions) -> Self {
        Self {
            options,
            output: String::new(),
            indent: 0,
        }
    }

    /// Lowers a whole program to a C++ translation unit.
    pub fn generate(mut self, program: &Program) -> Result<String> {
        for header in &self.options.includes {
            self.output.push_str(&format!("#include <{}>\n", header));
        }
        if !self.options.includes.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str("using namespace std;\n\n");

        self.line("int main() {");
        self.indent += 1;
        self.gen_block(&program.block)?;
        self.line("return 0;");
        self.indent -= 1;
        self.line("}");

        tracing::debug!(program = %program.name, bytes = self.output.len(), "generated C++");
        Ok(self.output)
    }

    fn line(&mut self, text: &str) {
        let width = self.indent * self.options.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn gen_block(&mut self, block: &Block) -> Result<()> {
        block.statements.iter().try_for_each(|stmt| self.gen_stmt(stmt))
    }

    fn gen_nested(&mut self, block: &Block) -> Result<()> {
        self.indent += 1;
        let result = self.gen_block(block);
        self.indent -= 1;
        result
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl(decl) => {
                let mut text = String::new();
                if decl.is_const {
                    text.push_str("const ");
                }
                text.push_str(map_type(decl.ty));
                text.push(' ');
                text.push_str(&decl.name);
                if let Some(init) = &decl.init {
                    text.push_str(" = ");
                    text.push_str(&self.gen_expr(init)?);
                }
                text.push(';');
                self.line(&text);
            },
            Stmt::Assign(assignment) => {
                let text = format!("{} = {};", assignment.name, self.gen_expr(&assignment.expr)?);
                self.line(&text);
            },
            Stmt::Read(read) => self.line(&format!("cin >> {};", read.name)),
            Stmt::Write(write) => {
                let mut text = String::from("cout");
                for expr in &write.expressions {
                    text.push_str(" << ");
                    text.push_str(&self.gen_expr(expr)?);
                }
                text.push_str(" << endl;");
                self.line(&text);
            },
            Stmt::If(stmt) => {
                let header = format!("if ({}) {{", self.gen_cond(&stmt.cond)?);
                self.line(&header);
                self.gen_nested(&stmt.then_block)?;
                if let Some(else_block) = &stmt.else_block {
                    self.line("} else {");
                    self.gen_nested(else_block)?;
                }
                self.line("}");
            },
            Stmt::While(stmt) => {
                let header = format!("while ({}) {{", self.gen_cond(&stmt.cond)?);
                self.line(&header);
                self.gen_nested(&stmt.block)?;
                self.line("}");
            },
            Stmt::For(stmt) => {
                let header = format!(
                    "for ({} = {}; {}; {} = {}) {{",
                    stmt.init.name,
                    self.gen_expr(&stmt.init.expr)?,
                    self.gen_cond(&stmt.cond)?,
                    stmt.update.name,
                    self.gen_expr(&stmt.update.expr)?,
                );
                self.line(&header);
                self.gen_nested(&stmt.block)?;
                self.line("}");
            },
            Stmt::Return(expr) => {
                let text = format!("return {};", self.gen_expr(expr)?);
                self.line(&text);
            },
            Stmt::Break => self.line("break;"),
        }
        Ok(())
    }

    /// C++ text of an expression.
    pub fn gen_expr(&self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Literal(value) => Ok(types::literal(value)),
            Expr::Variable(name) => Ok(name.clone()),
            Expr::Binary(binary) => {
                if !binary.op.is_arithmetic() {
                    return Err(CodeGenError::Internal(format!(
                        "relational operator '{}' inside an arithmetic expression",
                        binary.op
                    )));
                }
                let left = match binary.left.as_ref() {
                    // two C string literals cannot be added
                    Expr::Literal(text @ Literal::Text(_)) => format!("string({})", types::literal(text)),
                    other => self.gen_expr(other)?,
                };
                let right = self.gen_expr(&binary.right)?;
                Ok(format!("({} {} {})", left, map_op(binary.op), right))
            },
        }
    }

    /// C++ text of a condition, without the surrounding parentheses.
    pub fn gen_cond(&self, cond: &Condition) -> Result<String> {
        match cond {
            Condition::Single(expr) => self.gen_expr(expr),
            Condition::Compare { left, op, right } => {
                if !op.is_relational() {
                    return Err(CodeGenError::Internal(format!(
                        "arithmetic operator '{}' used as a comparison",
                        op
                    )));
                }
                Ok(format!("{} {} {}", self.gen_expr(left)?, map_op(*op), self.gen_expr(right)?))
            },
        }
    }
}

/// Lowers `program` with the default layout.
pub fn generate(program: &Program) -> Result<String> {
    CodeGenerator::new(CodegenOptions::default()).generate(program)
}
