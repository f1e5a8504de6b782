//! Lexer module.
//!
//! The lexer is a fixed-priority trial loop over six recognizers, one per
//! file:
//! - `operator` - `%` and the spelled-out operator words
//! - `keyword` - reserved words, including the two-word `fine X` forms
//! - `identifier` - names
//! - `number` - integer and comma-decimal literals
//! - `string` - double-quoted literals
//! - `symbol` - single-character punctuation
//!
//! `core` holds the `Lexer` itself and the `Recognizer` dispatch.

mod core;
mod identifier;
mod keyword;
mod number;
mod operator;
mod string;
mod symbol;

pub use self::core::{Lexer, Match, Recognizer};
