//! Editor-facing query operations over ASMR source text.
//!
//! Each operation is a pure function of one full-document snapshot: no state
//! is retained between calls, so concurrent calls on separate snapshots need
//! no locking. The `get_*`/`parse_*` functions produce the JSON consumed by
//! the editor-integration layer; the typed functions they wrap are public
//! for in-process consumers.

#![deny(clippy::unwrap_used)]

mod completion;
mod document_symbols;
mod error;
mod semantic_tokens;


pub use completion::{completion_items, CompletionItem};
pub use document_symbols::{document_symbols, DocumentSymbol, SymbolRange};
pub use error::AnalysisError;
pub use semantic_tokens::{
    semantic_tokens, semantic_tokens_with, SemanticToken, SEM_MOD_DECLARATION,
    SEM_MOD_DEFAULT_LIBRARY, SEM_MOD_DEFINITION, SEM_TOKEN_FUNCTION, SEM_TOKEN_VARIABLE,
    TOKEN_MODIFIERS, TOKEN_TYPES,
};

use semantic_tokens::FileToken;

/// Completion candidates for `text` as a JSON array of
/// `{token_name, token_type}`.
pub fn get_completion_items(text: &str) -> Result<String, AnalysisError> {
    let items = completion_items(text);
    tracing::debug!(bytes = text.len(), items = items.len(), "built completion items");
    Ok(serde_json::to_string(&items)?)
}

/// Outline symbols for `text` as a JSON array of
/// `{token_name, token_type, range}` with zero-based range fields.
pub fn get_document_symbols(text: &str) -> Result<String, AnalysisError> {
    let symbols = document_symbols(text);
    tracing::debug!(
        bytes = text.len(),
        symbols = symbols.len(),
        "built document symbols"
    );
    Ok(serde_json::to_string(&symbols)?)
}

/// Semantic tokens for `text` as a JSON array of
/// `{delta_line, delta_start, length, token_type}`.
///
/// A type index outside the legend is an engine defect and fails the call
/// rather than crossing the boundary.
pub fn parse_file_tokens(text: &str) -> Result<String, AnalysisError> {
    let tokens = semantic_tokens(text);
    let legend_size = TOKEN_TYPES.len() as u32;
    if let Some(bad) = tokens.iter().find(|t| t.token_type >= legend_size) {
        return Err(AnalysisError::TokenTypeOutsideLegend {
            token_type: bad.token_type,
            legend_size,
        });
    }
    let wire: Vec<FileToken> = tokens.iter().map(FileToken::from).collect();
    tracing::debug!(bytes = text.len(), tokens = wire.len(), "encoded semantic tokens");
    Ok(serde_json::to_string(&wire)?)
}
