//! itac-sem - Semantic Analyzer & Type Checker
//!
//! One pre-order, left-to-right pass over the AST that
//!
//! - records every declaration in a single program-wide [`SymbolTable`],
//! - rejects redeclarations and uses of undeclared names,
//! - infers expression types and checks assignments and conditions.
//!
//! The first violation aborts the pass. On success the final table is
//! returned so the driver can report it.
//!
//! # Typing rules
//!
//! | expression                    | type                                  |
//! |-------------------------------|---------------------------------------|
//! | numeric `op` numeric          | `decimale` if either side is, else `intero` |
//! | `testo piu testo`             | `testo`                               |
//! | `%` with a `decimale` operand | error                                 |
//!
//! The only implicit conversion is widening `intero` to `decimale`.
//!
//! # Example
//!
//! ```
//! let tokens = itac_lex::tokenize("programma P var x : intero assegna 1. fineprog").unwrap();
//! let program = itac_par::parse(tokens).unwrap();
//! let symbols = itac_sem::analyze(&program).unwrap();
//! assert_eq!(symbols.to_string(), "ID: x, Type: intero\n");
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod error;
pub mod symbols;
pub mod types;

#[cfg(test)]
mod edge_cases;

pub use analysis::SemanticAnalyzer;
pub use error::{Result, SemanticError};
pub use symbols::{Symbol, SymbolEntry, SymbolReport, SymbolTable};
pub use types::can_assign;

use itac_par::Program;

/// Runs a fresh analyzer over `program`.
pub fn analyze(program: &Program) -> Result<SymbolTable> {
    SemanticAnalyzer::new().analyze(program)
}
