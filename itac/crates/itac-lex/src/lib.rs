//! itac-lex - Lexical Analyzer for the itac language
//!
//! Turns a whole source document into an ordered token sequence terminated
//! by a single `EOF` token.
//!
//! # Overview
//!
//! After skipping whitespace the lexer tries six recognizers in a fixed
//! priority order and keeps the first match:
//!
//! 1. **word operator** - `%`, `piu`, `meno`, `moltiplica`, `diviso`,
//!    `uguale`, `diverso`, `minore`, `maggiore`, `minoreuguale`,
//!    `maggioreuguale`
//! 2. **keyword** - reserved words; `fine prog`, `fine se`, `fine mentre`
//!    and `fine per` may be written as two words
//! 3. **identifier** - `[letter][letter|digit|_]*`
//! 4. **number** - `42` (`NUM_INT`) or `3,14` (`NUM_DEC`, comma as decimal point)
//! 5. **string** - `"..."`, backslash escapes kept verbatim
//! 6. **symbol** - `. ( ) , :`
//!
//! A recognizer that declines never moves the input, so the next one in line
//! sees the same position. If all six decline the lexer fails.
//!
//! # Example Usage
//!
//! ```
//! use itac_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("scrivi(3,14).").unwrap();
//! assert!(tokens[2].is(TokenKind::NumDec, "3,14"));
//! assert_eq!(tokens.last().unwrap().kind(), TokenKind::Eof);
//! ```

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::{Lexer, Match, Recognizer};
pub use token::{is_operator_word, is_reserved, Token, TokenKind, OPERATOR_WORDS, RESERVED_WORDS};

/// Tokenizes a whole document.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}
