//! itac-drv - Compiler Driver
//!
//! Runs the four phases over one in-memory source document:
//!
//! ```text
//! source ─► itac-lex ─► tokens ─► itac-par ─► AST ─► itac-sem ─► itac-gen ─► C++
//! ```
//!
//! Each phase runs to completion before the next starts, and the first error
//! from any phase aborts the run. A [`Session`] holds no per-program state,
//! so one session can compile any number of documents.
//!
//! # Example
//!
//! ```
//! use itac_drv::{Session, SessionOptions};
//!
//! let session = Session::new(SessionOptions::default());
//! let compilation = session
//!     .compile("programma Demo var n : intero assegna 5. scrivi(n). fineprog")
//!     .unwrap();
//! assert!(compilation.output.contains("cout << n << endl;"));
//! assert_eq!(compilation.symbols.unwrap().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod config;

pub use config::{Config, ConfigError, SymbolFormat};

use itac_gen::{CodeGenError, CodeGenerator, CodegenOptions};
use itac_lex::{LexError, Token};
use itac_par::{ParseError, Parser, Program};
use itac_sem::{SemanticAnalyzer, SemanticError, SymbolTable};
use itac_util::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// What a compile run writes to the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EmitType {
    /// One `<KIND, lexeme>` line per token; stops after lexing
    Tokens,
    /// Pretty-printed syntax tree; stops after parsing
    Ast,
    /// Generated C++
    #[default]
    Cpp,
}

/// Error from any phase of a compile run.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Lexical error
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Syntax error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Semantic or internal analyzer error
    #[error(transparent)]
    Semantic(#[from] SemanticError),

    /// Internal code generator error
    #[error(transparent)]
    CodeGen(#[from] CodeGenError),

    /// Reading the source or writing the output failed
    #[error("{}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CompileError {
    /// Renderable diagnostic for errors raised by a compiler phase.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            CompileError::Lex(err) => Some(err.diagnostic()),
            CompileError::Parse(err) => Some(err.diagnostic()),
            CompileError::Semantic(err) => Some(err.diagnostic()),
            CompileError::CodeGen(err) => Some(err.diagnostic()),
            CompileError::Io { .. } | CompileError::Config(_) => None,
        }
    }
}

/// Options fixed for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Output kind
    pub emit: EmitType,
    /// C++ layout
    pub codegen: CodegenOptions,
}

impl SessionOptions {
    /// Options described by a configuration file.
    pub fn from_config(config: &Config, emit: EmitType) -> Self {
        Self {
            emit,
            codegen: config.codegen_options(),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// Text for the output file
    pub output: String,
    /// Final symbol table; `None` when the run stopped before analysis
    pub symbols: Option<SymbolTable>,
}

/// A configured compiler pipeline.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: SessionOptions,
}

impl Session {
    /// Creates a session.
    pub fn new(options: SessionOptions) -> Self {
        Self { options }
    }

    /// Session options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Compiles one source document.
    pub fn compile(&self, source: &str) -> Result<Compilation, CompileError> {
        tracing::info!("lexical analysis");
        let tokens = itac_lex::tokenize(source)?;
        if self.options.emit == EmitType::Tokens {
            return Ok(Compilation {
                output: render_tokens(&tokens),
                symbols: None,
            });
        }

        tracing::info!("parsing");
        let program = Parser::new(tokens).parse_program()?;
        if self.options.emit == EmitType::Ast {
            return Ok(Compilation {
                output: render_ast(&program),
                symbols: None,
            });
        }

        tracing::info!("semantic analysis");
        let symbols = SemanticAnalyzer::new().analyze(&program)?;

        tracing::info!("code generation");
        let output = CodeGenerator::new(self.options.codegen.clone()).generate(&program)?;

        tracing::info!(program = %program.name, "compilation finished");
        Ok(Compilation {
            output,
            symbols: Some(symbols),
        })
    }
}

fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

fn render_ast(program: &Program) -> String {
    format!("{:#?}\n", program)
}
