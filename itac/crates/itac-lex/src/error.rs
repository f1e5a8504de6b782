//! Lexical error types.

use itac_util::{Category, Diagnostic};
use thiserror::Error;

/// Error raised when the source text cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No recognizer accepted the character under the cursor.
    #[error("unrecognized character '{found}' at position {position}")]
    UnrecognizedChar {
        /// The offending character
        found: char,
        /// Byte offset
        position: usize,
        /// Line (1-based)
        line: u32,
        /// Column (1-based)
        column: u32,
    },

    /// End of input reached inside a string literal.
    #[error("unterminated string literal starting at position {position}")]
    UnterminatedString {
        /// Byte offset of the opening quote
        position: usize,
        /// Line of the opening quote
        line: u32,
    },
}

impl LexError {
    /// Line the error was detected on.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnrecognizedChar { line, .. } | LexError::UnterminatedString { line, .. } => {
                *line
            },
        }
    }

    /// Lowers the error into a renderable diagnostic.
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Category::Lexical, self.to_string()).line(self.line())
    }
}

/// Result type alias for lexing operations
pub type Result<T> = std::result::Result<T, LexError>;
