//! Error types for code generation

use itac_util::{Category, Diagnostic};
use thiserror::Error;

/// Code generation error.
///
/// The generator trusts the analyzer, so the only failure is an AST shape
/// no valid program can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeGenError {
    /// Internal error - indicates a bug in an earlier phase
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CodeGenError {
    /// Lowers the error into a renderable diagnostic.
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Category::Internal, self.to_string())
            .note("the parser produced a tree the code generator cannot lower")
    }
}

/// Result type alias for code generation operations
pub type Result<T> = std::result::Result<T, CodeGenError>;
