//! itac-util - Shared foundation types for the itac compiler
//!
//! Every phase of the pipeline (lexer, parser, semantic analyzer, code
//! generator) reports failure through its own error enum. Those enums all
//! lower into the single [`Diagnostic`] type defined here, so the driver can
//! render any failure the same way regardless of which phase produced it.
//!
//! # Example
//!
//! ```
//! use itac_util::{Category, Diagnostic};
//!
//! let diag = Diagnostic::new(Category::Syntax, "expected <SYMBOL, .>")
//!     .line(3)
//!     .after("x");
//! assert!(diag.to_string().starts_with("error[syntax]"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Category, Diagnostic, Level};
