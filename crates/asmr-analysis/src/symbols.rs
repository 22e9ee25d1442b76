//! Symbol table built by the resolver.

use rustc_hash::FxHashMap;
use serde::Serialize;

use asmr_syntax::{DeclShape, Span};

/// Classification of a named symbol.
///
/// This set is closed: the boundary protocol has no unknown kind, so a value
/// outside it cannot exist by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    Variable,
    Function,
    Label,
}

impl From<DeclShape> for SymbolKind {
    fn from(shape: DeclShape) -> Self {
        match shape {
            DeclShape::Label => SymbolKind::Label,
            DeclShape::Variable => SymbolKind::Variable,
            DeclShape::Function => SymbolKind::Function,
        }
    }
}

/// A named symbol with its defining occurrence and every later use.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Range of the defining occurrence.
    pub declaration: Span,
    /// Ranges of subsequent uses, in source order.
    pub references: Vec<Span>,
}

/// Mapping from name to [`Symbol`], iterated in first-declaration order.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&slot| &self.symbols[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Record a declaration-shaped occurrence.
    ///
    /// The first declaration of a name fixes its kind; a later declaration
    /// under a conflicting kind is appended as a reference of the original
    /// symbol, never reclassified.
    pub(crate) fn declare(&mut self, name: &str, kind: SymbolKind, span: Span) {
        match self.index.get(name) {
            Some(&slot) => self.symbols[slot].references.push(span),
            None => {
                self.index.insert(name.to_string(), self.symbols.len());
                self.symbols.push(Symbol {
                    name: name.to_string(),
                    kind,
                    declaration: span,
                    references: Vec::new(),
                });
            }
        }
    }

    /// Record a plain use of `name` if it is already declared. Unknown names
    /// are ignored rather than fabricated into the table.
    pub(crate) fn reference(&mut self, name: &str, span: Span) {
        if let Some(&slot) = self.index.get(name) {
            self.symbols[slot].references.push(span);
        }
    }
}
