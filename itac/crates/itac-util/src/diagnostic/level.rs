//! Diagnostic severity levels and error categories.

use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use itac_util::diagnostic::Level;
///
/// assert_eq!(Level::Error.name(), "error");
/// assert!(Level::Bug.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A user-facing error in the compiled program
    Error,
    /// An internal compiler error: a later phase received an AST shape it
    /// was never taught to handle
    Bug,
    /// Additional information attached to a diagnostic
    Note,
}

impl Level {
    /// Returns true if this level aborts compilation
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Bug)
    }

    /// Returns the canonical name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Bug => "internal compiler error",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The compiler phase family an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Unrecognized character or unterminated string literal
    Lexical,
    /// Token sequence does not match the grammar
    Syntax,
    /// Declaration, scoping or typing rule violated
    Semantic,
    /// Contract violation between phases
    Internal,
}

impl Category {
    /// Short lowercase tag used in rendered diagnostics (`error[syntax]`)
    pub const fn tag(&self) -> &'static str {
        match self {
            Category::Lexical => "lexical",
            Category::Syntax => "syntax",
            Category::Semantic => "semantic",
            Category::Internal => "internal",
        }
    }

    /// Severity implied by the category
    pub const fn level(&self) -> Level {
        match self {
            Category::Internal => Level::Bug,
            _ => Level::Error,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_is_bug() {
        assert_eq!(Category::Internal.level(), Level::Bug);
        assert_eq!(Category::Syntax.level(), Level::Error);
    }

    #[test]
    fn test_note_is_not_error() {
        assert!(!Level::Note.is_error());
        assert!(Level::Error.is_error());
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(Category::Lexical.to_string(), "lexical");
        assert_eq!(Category::Semantic.tag(), "semantic");
    }
}
