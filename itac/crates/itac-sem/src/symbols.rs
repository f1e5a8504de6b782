//! Flat, insertion-ordered symbol table.
//!
//! One table covers the whole program: entering `se`, `mentre` or `per` does
//! not open a new scope, so a name can be declared at most once anywhere.

use indexmap::IndexMap;
use itac_par::PrimitiveType;
use serde::Serialize;
use std::fmt;

/// What the analyzer knows about a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Declared type
    pub ty: PrimitiveType,
    /// Declared with `cost`
    pub constant: bool,
}

/// Name to [`Symbol`] mapping in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`, returning the previous entry.
    /// An overwritten name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, symbol: Symbol) -> Option<Symbol> {
        self.symbols.insert(name.into(), symbol)
    }

    /// Looks up a name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Returns true if `name` has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.symbols.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    /// Structured form of the table for machine-readable output.
    pub fn report(&self) -> SymbolReport {
        SymbolReport {
            symbols: self
                .iter()
                .map(|(name, symbol)| SymbolEntry {
                    name: name.to_string(),
                    ty: symbol.ty.keyword(),
                    constant: symbol.constant,
                })
                .collect(),
        }
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "symbol table is empty");
        }
        for (name, symbol) in self.iter() {
            writeln!(f, "ID: {}, Type: {}", name, symbol.ty)?;
        }
        Ok(())
    }
}

/// Serializable snapshot of a [`SymbolTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolReport {
    /// Entries in declaration order
    pub symbols: Vec<SymbolEntry>,
}

/// One row of a [`SymbolReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    /// Declared name
    pub name: String,
    /// Type keyword (`intero`, `decimale`, `booleano`, `testo`)
    #[serde(rename = "type")]
    pub ty: &'static str,
    /// Declared with `cost`
    pub constant: bool,
}
