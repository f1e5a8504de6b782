//! Token model and the fixed word tables of the language.

use std::fmt;

/// Reserved words. The four `fine...` entries are written as two words in
/// source (`fine prog`) or as one (`fineprog`); both lex to the same keyword.
pub const RESERVED_WORDS: &[&str] = &[
    "programma", "fineprog",
    "var", "cost",
    "intero", "decimale", "testo", "booleano",
    "leggi", "scrivi",
    "se", "allora", "altrimenti", "finese",
    "mentre", "fai", "finementre",
    "per", "fineper",
    "ritorna",
    "vero", "falso",
    "assegna",
    "interrompi",
    "e", "non",
];

/// Spelled-out operator words.
pub const OPERATOR_WORDS: &[&str] = &[
    "piu", "meno", "moltiplica", "diviso",
    "uguale", "diverso", "minore", "maggiore",
    "minoreuguale", "maggioreuguale",
];

/// The only operator written as a symbol.
pub const SYMBOLIC_OPERATOR: char = '%';

/// Single-character punctuation.
pub const SYMBOLS: &[char] = &['.', '(', ')', ',', ':'];

/// Prefix word of the compound block terminators.
pub const END_PREFIX: &str = "fine";

/// Returns true if `word` is a reserved word.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Returns true if `word` is a spelled-out operator.
pub fn is_operator_word(word: &str) -> bool {
    OPERATOR_WORDS.contains(&word)
}

/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier
    Id,
    /// Reserved word
    Keyword,
    /// Arithmetic or relational operator
    Operator,
    /// Integer literal
    NumInt,
    /// Decimal literal (comma as decimal point)
    NumDec,
    /// String literal, quotes stripped
    String,
    /// Punctuation
    Symbol,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Upper-case name used when displaying tokens.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Id => "ID",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::NumInt => "NUM_INT",
            TokenKind::NumDec => "NUM_DEC",
            TokenKind::String => "STRING",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable (kind, lexeme) pair.
///
/// ```
/// use itac_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, "se");
/// assert_eq!(token.to_string(), "<KEYWORD, se>");
/// assert!(token.is(TokenKind::Keyword, "se"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// The end-of-input marker.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Token category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Source text of the token (string literals without their quotes).
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns true if the token has the given kind and lexeme.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.lexeme)
    }
}
