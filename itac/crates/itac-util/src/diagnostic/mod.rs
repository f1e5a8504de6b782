//! Diagnostic module - uniform rendering of compile errors.
//!
//! Phases fail fast, so a compile run produces at most one [`Diagnostic`].
//! It carries the error [`Category`], the message, and the best-effort
//! location context the phase could supply.
//!
//! # Examples
//!
//! ```
//! use itac_util::diagnostic::{Category, Diagnostic};
//!
//! let diag = Diagnostic::new(Category::Semantic, "variable 'x' is already declared")
//!     .note("the symbol table is shared by the whole program");
//! let text = diag.to_string();
//! assert!(text.contains("error[semantic]: variable 'x' is already declared"));
//! assert!(text.contains("= note: the symbol table"));
//! ```

mod level;

pub use level::{Category, Level};

use std::fmt;

/// A rendered-on-demand compile error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity, derived from the category
    pub level: Level,
    /// Error family
    pub category: Category,
    /// Main message
    pub message: String,
    /// Approximate 1-based source line, when the phase knows one
    pub line: Option<u32>,
    /// Last lexeme successfully consumed before the error
    pub after: Option<String>,
    /// Extra context lines
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with no location context.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            level: category.level(),
            category,
            message: message.into(),
            line: None,
            after: None,
            notes: Vec::new(),
        }
    }

    /// Attaches an approximate line number.
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches the last consumed lexeme.
    pub fn after(mut self, lexeme: impl Into<String>) -> Self {
        self.after = Some(lexeme.into());
        self
    }

    /// Appends a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.level, self.category, self.message)?;

        match (self.line, &self.after) {
            (Some(line), Some(after)) => write!(f, "\n  --> line ~{}, after '{}'", line, after)?,
            (Some(line), None) => write!(f, "\n  --> line ~{}", line)?,
            (None, Some(after)) => write!(f, "\n  --> after '{}'", after)?,
            (None, None) => {},
        }

        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}
