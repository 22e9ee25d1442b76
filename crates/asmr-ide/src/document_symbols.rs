//! Document outline: one entry per declaration, in reading order.

use serde::Serialize;

use asmr_analysis::{resolve, SymbolKind};
use asmr_syntax::{tokenize, Span};

/// Zero-based, half-open source range of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolRange {
    pub line_start: usize,
    pub char_start: usize,
    pub line_end: usize,
    pub char_end: usize,
}

impl From<Span> for SymbolRange {
    fn from(span: Span) -> Self {
        Self {
            line_start: span.start.line,
            char_start: span.start.column,
            line_end: span.end.line,
            char_end: span.end.column,
        }
    }
}

/// An outline entry for a single declaration. Reference occurrences are not
/// surfaced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSymbol {
    pub token_name: String,
    pub token_type: SymbolKind,
    pub range: SymbolRange,
}

/// Outline entries for every declaration, sorted ascending by start
/// position. Outlines render positionally, so this order is required.
pub fn document_symbols(text: &str) -> Vec<DocumentSymbol> {
    let tokens = tokenize(text);
    let mut symbols: Vec<DocumentSymbol> = resolve(&tokens)
        .iter()
        .map(|symbol| DocumentSymbol {
            token_name: symbol.name.clone(),
            token_type: symbol.kind,
            range: non_empty(symbol.declaration.into()),
        })
        .collect();
    symbols.sort_by_key(|s| (s.range.line_start, s.range.char_start));
    symbols
}

/// Outline entries mark a selectable region; a degenerate range is widened
/// to a single column so start strictly precedes end.
fn non_empty(range: SymbolRange) -> SymbolRange {
    if (range.line_end, range.char_end) <= (range.line_start, range.char_start) {
        SymbolRange {
            line_end: range.line_start,
            char_end: range.char_start + 1,
            ..range
        }
    } else {
        range
    }
}
