//! Completion candidates derived from the symbol table.

use serde::Serialize;

use asmr_analysis::{resolve, SymbolKind};
use asmr_syntax::tokenize;

/// A named candidate surfaced to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub token_name: String,
    pub token_type: SymbolKind,
}

/// One item per known symbol, in first-declaration order.
///
/// The table guarantees name uniqueness, and the order is stable across
/// calls on unchanged text, so consumers may cache the result byte-for-byte.
pub fn completion_items(text: &str) -> Vec<CompletionItem> {
    let tokens = tokenize(text);
    resolve(&tokens)
        .iter()
        .map(|symbol| CompletionItem {
            token_name: symbol.name.clone(),
            token_type: symbol.kind,
        })
        .collect()
}
