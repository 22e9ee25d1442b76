//! Delta-encoded semantic highlighting tokens.
//!
//! The encoder is a purely lexical pass: declaration occurrences and builtin
//! references are highlighted, plain references are not. No symbol table is
//! consulted.

use serde::Serialize;

use asmr_syntax::{
    declaration_shape, significant_indices, tokenize_with, DeclShape, Dialect, RawToken, TokenKind,
};

/// Token type legend shared with the consumer. `token_type` on the wire is
/// an index into this list; labels map onto the `variable` category.
pub const TOKEN_TYPES: &[&str] = &["variable", "function"];

/// Modifier legend. Bit `n` of the modifier bitmask selects
/// `TOKEN_MODIFIERS[n]`.
pub const TOKEN_MODIFIERS: &[&str] = &["declaration", "definition", "defaultLibrary"];

pub const SEM_TOKEN_VARIABLE: u32 = 0;
pub const SEM_TOKEN_FUNCTION: u32 = 1;

pub const SEM_MOD_DECLARATION: u32 = 1 << 0;
pub const SEM_MOD_DEFINITION: u32 = 1 << 1;
pub const SEM_MOD_DEFAULT_LIBRARY: u32 = 1 << 2;

/// A highlighting token, positioned relative to the previously emitted one.
///
/// `delta_start` is a column delta while `delta_line` is zero, and the
/// absolute column otherwise; the first token is relative to (0,0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticToken {
    pub delta_line: u32,
    pub delta_start: u32,
    pub length: u32,
    pub token_type: u32,
    pub token_modifiers: u32,
}

/// Wire record: the boundary protocol carries no modifier bitmask.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct FileToken {
    pub delta_line: u32,
    pub delta_start: u32,
    pub length: u32,
    pub token_type: u32,
}

impl From<&SemanticToken> for FileToken {
    fn from(token: &SemanticToken) -> Self {
        Self {
            delta_line: token.delta_line,
            delta_start: token.delta_start,
            length: token.length,
            token_type: token.token_type,
        }
    }
}

/// Encode with the default dialect tables.
pub fn semantic_tokens(text: &str) -> Vec<SemanticToken> {
    semantic_tokens_with(text, &Dialect::default())
}

pub fn semantic_tokens_with(text: &str, dialect: &Dialect) -> Vec<SemanticToken> {
    let tokens = tokenize_with(text, dialect);
    let significant = significant_indices(&tokens);

    let mut absolute = Vec::new();
    for (position, &index) in significant.iter().enumerate() {
        let token = &tokens[index];
        let prev = position.checked_sub(1).map(|p| &tokens[significant[p]]);
        let next = significant.get(position + 1).map(|&n| &tokens[n]);
        let Some((token_type, token_modifiers)) = classify(prev, token, next, dialect) else {
            continue;
        };
        let length = token.len() as u32;
        if length == 0 {
            continue;
        }
        absolute.push(AbsoluteToken {
            line: token.span.start.line,
            column: token.span.start.column,
            length,
            token_type,
            token_modifiers,
        });
    }

    // The lexer emits in source order, but an arbitrary token source might
    // not; sort before delta-encoding.
    absolute.sort_by_key(|t| (t.line, t.column));
    encode(&absolute)
}

struct AbsoluteToken {
    line: usize,
    column: usize,
    length: u32,
    token_type: u32,
    token_modifiers: u32,
}

fn classify(
    prev: Option<&RawToken>,
    token: &RawToken,
    next: Option<&RawToken>,
    dialect: &Dialect,
) -> Option<(u32, u32)> {
    if let Some(shape) = declaration_shape(prev, token, next, dialect) {
        let token_type = match shape {
            DeclShape::Label | DeclShape::Variable => SEM_TOKEN_VARIABLE,
            DeclShape::Function => SEM_TOKEN_FUNCTION,
        };
        return Some((token_type, SEM_MOD_DECLARATION | SEM_MOD_DEFINITION));
    }
    if token.kind == TokenKind::Identifier && dialect.is_builtin(&token.text) {
        return Some((SEM_TOKEN_FUNCTION, SEM_MOD_DEFAULT_LIBRARY));
    }
    None
}

fn encode(absolute: &[AbsoluteToken]) -> Vec<SemanticToken> {
    let mut data = Vec::with_capacity(absolute.len());
    let mut prev_line = 0usize;
    let mut prev_column = 0usize;
    for token in absolute {
        let delta_line = token.line - prev_line;
        let delta_start = if delta_line == 0 {
            token.column - prev_column
        } else {
            token.column
        };
        data.push(SemanticToken {
            delta_line: delta_line as u32,
            delta_start: delta_start as u32,
            length: token.length,
            token_type: token.token_type,
            token_modifiers: token.token_modifiers,
        });
        prev_line = token.line;
        prev_column = token.column;
    }
    data
}
