//! Syntax error types.

use itac_lex::Token;
use itac_util::{Category, Diagnostic};
use thiserror::Error;

/// Where in the token stream a syntax error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// 1 + number of consumed lexemes containing a newline
    pub line: u32,
    /// Last lexeme consumed before the error (empty at the start)
    pub after: String,
    /// Index of the offending token
    pub position: usize,
}

/// Error raised when the token sequence does not match the grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A specific token or token class was required.
    #[error("expected {expected}, found {found}")]
    Expected {
        /// What the grammar required
        expected: String,
        /// What was there instead
        found: Token,
        /// Where
        location: Location,
    },

    /// No production starts with the current token.
    #[error("unexpected token {found} at the start of {context}")]
    Unexpected {
        /// The production being attempted
        context: &'static str,
        /// The token that starts nothing
        found: Token,
        /// Where
        location: Location,
    },

    /// An integer literal that does not fit in 32 bits.
    #[error("integer literal '{lexeme}' is out of range for intero")]
    IntegerOverflow {
        /// The literal text
        lexeme: String,
        /// Where
        location: Location,
    },

    /// A decimal literal too large to be represented.
    #[error("decimal literal '{lexeme}' is out of range for decimale")]
    DecimalOverflow {
        /// The literal text
        lexeme: String,
        /// Where
        location: Location,
    },

    /// Blocks or parenthesized expressions nested past the parser's limit.
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep {
        /// The limit that was hit
        limit: usize,
        /// Where
        location: Location,
    },
}

impl ParseError {
    /// Location the error was detected at.
    pub fn location(&self) -> &Location {
        match self {
            ParseError::Expected { location, .. }
            | ParseError::Unexpected { location, .. }
            | ParseError::IntegerOverflow { location, .. }
            | ParseError::DecimalOverflow { location, .. }
            | ParseError::NestingTooDeep { location, .. } => location,
        }
    }

    /// Lowers the error into a renderable diagnostic.
    pub fn diagnostic(&self) -> Diagnostic {
        let location = self.location();
        Diagnostic::new(Category::Syntax, self.to_string())
            .line(location.line)
            .after(location.after.clone())
            .note(format!("at token {}", location.position))
    }
}

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
