//! Lexical declaration-shape classification.
//!
//! Both the symbol resolver and the semantic-token encoder need to know
//! whether a token declares a name; neither needs more than one significant
//! token of context on either side.

use crate::dialect::Dialect;
use crate::token::{RawToken, TokenKind};

/// The syntactic role a declaring token plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclShape {
    Label,
    Variable,
    Function,
}

/// Indices of tokens that carry code (whitespace, newlines, and comments
/// stripped).
pub fn significant_indices(tokens: &[RawToken]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.kind.is_significant())
        .map(|(index, _)| index)
        .collect()
}

/// Classify `token` given its significant neighbours.
///
/// - A `Label` token declares a label (the lexer already enforced its shape).
/// - An identifier that opens its line and is followed on the same line by a
///   data directive (`msg db "hi"`) declares a variable.
/// - An identifier preceded on the same line by `proc` declares a function.
///
/// Everything else declares nothing.
pub fn declaration_shape(
    prev: Option<&RawToken>,
    token: &RawToken,
    next: Option<&RawToken>,
    dialect: &Dialect,
) -> Option<DeclShape> {
    match token.kind {
        TokenKind::Label => Some(DeclShape::Label),
        TokenKind::Identifier => {
            let opens_line = prev.is_none_or(|p| p.span.start.line < token.span.start.line);
            if opens_line
                && next.is_some_and(|n| {
                    n.kind == TokenKind::Directive
                        && n.span.start.line == token.span.start.line
                        && dialect.is_data_directive(&n.text)
                })
            {
                return Some(DeclShape::Variable);
            }
            if prev.is_some_and(|p| {
                p.kind == TokenKind::Directive
                    && p.span.start.line == token.span.start.line
                    && dialect.is_proc_opener(&p.text)
            }) {
                return Some(DeclShape::Function);
            }
            None
        }
        _ => None,
    }
}
