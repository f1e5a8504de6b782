//! Core lexer implementation.

use tracing::{debug, trace};

use super::{identifier, keyword, number, operator, string, symbol};
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};

/// A successful recognition: the token and the cursor just past it.
///
/// `None` means the recognizer declined; since it only ever worked on a
/// copy of the lexer's cursor, declining never moves the input.
pub type Match<'a> = Option<(Token, Cursor<'a>)>;

/// The six recognizers, in the order the lexer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    /// `%` or a spelled-out operator word
    WordOperator,
    /// Reserved word
    Keyword,
    /// Identifier
    Identifier,
    /// Numeric literal
    Number,
    /// String literal
    String,
    /// Punctuation
    Symbol,
}

impl Recognizer {
    /// Trial order. Operators come before keywords so `piu` is never a
    /// keyword, and keywords before identifiers so reserved words are never
    /// names.
    pub const PRIORITY: [Recognizer; 6] = [
        Recognizer::WordOperator,
        Recognizer::Keyword,
        Recognizer::Identifier,
        Recognizer::Number,
        Recognizer::String,
        Recognizer::Symbol,
    ];

    /// Attempts a match at `cursor`.
    ///
    /// Only the string recognizer can fail outright (unterminated literal).
    pub fn recognize(self, cursor: Cursor<'_>) -> Result<Match<'_>> {
        match self {
            Recognizer::WordOperator => Ok(operator::recognize(cursor)),
            Recognizer::Keyword => Ok(keyword::recognize(cursor)),
            Recognizer::Identifier => Ok(identifier::recognize(cursor)),
            Recognizer::Number => Ok(number::recognize(cursor)),
            Recognizer::String => string::recognize(cursor),
            Recognizer::Symbol => Ok(symbol::recognize(cursor)),
        }
    }
}

/// Lexer for itac source text.
///
/// ```
/// use itac_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x : intero.");
/// let first = lexer.next_token().unwrap();
/// assert!(first.is(TokenKind::Keyword, "var"));
/// ```
pub struct Lexer<'a> {
    /// Cursor over the source.
    cursor: Cursor<'a>,

    /// Set once `Eof` or an error has been produced by the iterator.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the whole document.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Returns the next token, `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        self.cursor.skip_whitespace();

        if self.cursor.is_at_end() {
            return Ok(Token::eof());
        }

        for recognizer in Recognizer::PRIORITY {
            if let Some((token, next)) = recognizer.recognize(self.cursor)? {
                trace!(?recognizer, %token, "matched");
                self.cursor = next;
                return Ok(token);
            }
        }

        Err(LexError::UnrecognizedChar {
            found: self.cursor.current_char(),
            position: self.cursor.position(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        })
    }

    /// Lexes the rest of the input. The returned sequence always ends with
    /// exactly one `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind() == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token before `Eof`; an error is yielded once and ends the
/// iteration.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind() == TokenKind::Eof => {
                self.finished = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            },
        }
    }
}
