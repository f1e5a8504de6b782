//! itac-par - Parser (Syntactic Analyzer) for the itac language
//!
//! A recursive-descent parser with one token of lookahead that turns the
//! lexer's token sequence into a [`Program`].
//!
//! # Overview
//!
//! - Statements and blocks are parsed top-down, one production per method.
//! - Arithmetic has a **single precedence level**: `piu`, `meno`,
//!   `moltiplica`, `diviso` and `%` bind equally and associate to the left,
//!   so `a piu b moltiplica c` is `(a piu b) moltiplica c`.
//! - Relational operators only appear in conditions, never inside an
//!   expression.
//!
//! Parsing stops at the first error; no partial tree is returned.
//!
//! # Example Usage
//!
//! ```
//! use itac_par::{Parser, Stmt};
//!
//! let tokens = itac_lex::tokenize("programma P scrivi(1). fineprog").unwrap();
//! let program = Parser::new(tokens).parse_program().unwrap();
//! assert_eq!(program.name, "P");
//! assert!(matches!(program.block.statements[0], Stmt::Write(_)));
//! ```

#![warn(missing_docs)]

pub mod ast;
pub mod error;
mod expr;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;
pub use error::{Location, ParseError, Result};

use itac_lex::{Token, TokenKind};

/// Deepest nesting of blocks, parentheses and operator chains the parser
/// accepts. Later phases recurse over the tree, so it bounds them too.
pub const MAX_NESTING: usize = 256;

/// Keywords that close a block.
pub const BLOCK_TERMINATORS: &[&str] = &["fineprog", "altrimenti", "finese", "finementre", "fineper"];

/// Recursive-descent parser over a token vector.
pub struct Parser {
    /// Token stream, always ending in `EOF`
    tokens: Vec<Token>,

    /// Index of the current token
    position: usize,

    /// Current nesting level, checked against [`MAX_NESTING`]
    depth: usize,
}

impl Parser {
    /// Creates a parser. An `EOF` token is appended if the stream lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(Token::kind) != Some(TokenKind::Eof) {
            tokens.push(Token::eof());
        }
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parses a whole program.
    ///
    /// `Program := programma ID Block fineprog EOF`
    pub fn parse_program(&mut self) -> Result<Program> {
        self.expect(TokenKind::Keyword, "programma")?;
        let name = self.expect_id()?;
        let block = self.parse_block()?;
        self.expect(TokenKind::Keyword, "fineprog")?;
        if self.current().kind() != TokenKind::Eof {
            return Err(self.error_expected("<EOF>"));
        }

        tracing::debug!(
            program = %name,
            statements = block.statements.len(),
            "parsed program"
        );
        Ok(Program { name, block })
    }

    /// Parses statements until `EOF` or a block terminator.
    pub fn parse_block(&mut self) -> Result<Block> {
        self.enter()?;
        let mut statements = Vec::new();
        while !self.at_block_end() {
            statements.push(self.parse_stmt()?);
        }
        self.depth -= 1;
        Ok(Block { statements })
    }

    /// Opens one nesting level.
    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                location: self.location(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn at_block_end(&self) -> bool {
        let token = self.current();
        token.kind() == TokenKind::Eof
            || (token.kind() == TokenKind::Keyword && BLOCK_TERMINATORS.contains(&token.lexeme()))
    }

    // ========================================================================
    // TOKEN NAVIGATION
    // ========================================================================

    /// Current token; `EOF` once the stream is exhausted.
    fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.position.min(last)]
    }

    /// Moves to the next token. Never moves past `EOF`.
    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    /// Returns true if the current token has the given kind and lexeme.
    fn check(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.current().is(kind, lexeme)
    }

    fn check_keyword(&self, lexeme: &str) -> bool {
        self.check(TokenKind::Keyword, lexeme)
    }

    /// Consumes the current token if it matches.
    fn eat(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.check(kind, lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token or fails with an "expected" error.
    fn expect(&mut self, kind: TokenKind, lexeme: &str) -> Result<()> {
        if self.eat(kind, lexeme) {
            Ok(())
        } else {
            Err(self.error_expected(Token::new(kind, lexeme).to_string()))
        }
    }

    fn expect_symbol(&mut self, lexeme: &str) -> Result<()> {
        self.expect(TokenKind::Symbol, lexeme)
    }

    fn expect_keyword(&mut self, lexeme: &str) -> Result<()> {
        self.expect(TokenKind::Keyword, lexeme)
    }

    /// Consumes an identifier and returns its name.
    fn expect_id(&mut self) -> Result<String> {
        if self.current().kind() == TokenKind::Id {
            let name = self.current().lexeme().to_string();
            self.advance();
            Ok(name)
        } else {
            Err(self.error_expected("<ID>"))
        }
    }

    // ========================================================================
    // ERRORS
    // ========================================================================

    /// Best-effort location: lines are counted from newline-bearing lexemes
    /// consumed so far, which only string literals can contain.
    fn location(&self) -> Location {
        let consumed = &self.tokens[..self.position.min(self.tokens.len())];
        let newlines = consumed.iter().filter(|t| t.lexeme().contains('\n')).count();
        Location {
            line: 1 + newlines as u32,
            after: consumed.last().map(|t| t.lexeme().to_string()).unwrap_or_default(),
            position: self.position,
        }
    }

    fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Expected {
            expected: expected.into(),
            found: self.current().clone(),
            location: self.location(),
        }
    }

    fn error_unexpected(&self, context: &'static str) -> ParseError {
        ParseError::Unexpected {
            context,
            found: self.current().clone(),
            location: self.location(),
        }
    }
}

/// Parses an already-lexed token vector into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse_program()
}
