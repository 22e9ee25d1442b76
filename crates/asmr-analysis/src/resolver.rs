//! One-pass name resolution over the token stream.

use asmr_syntax::{declaration_shape, significant_indices, Dialect, RawToken, TokenKind};

use crate::symbols::SymbolTable;

/// Resolve with the default dialect tables.
pub fn resolve(tokens: &[RawToken]) -> SymbolTable {
    resolve_with(tokens, &Dialect::default())
}

/// Walk the significant tokens once, building the symbol table.
///
/// Declaration-shaped occurrences insert or extend symbols under the
/// first-declaration-wins rule; plain identifiers extend an existing symbol's
/// references or are ignored. The walk is strictly left to right, so a use
/// before its declaration is not recorded.
pub fn resolve_with(tokens: &[RawToken], dialect: &Dialect) -> SymbolTable {
    let mut table = SymbolTable::default();
    let significant = significant_indices(tokens);

    for (position, &index) in significant.iter().enumerate() {
        let token = &tokens[index];
        let prev = position
            .checked_sub(1)
            .map(|p| &tokens[significant[p]]);
        let next = significant.get(position + 1).map(|&n| &tokens[n]);

        match declaration_shape(prev, token, next, dialect) {
            Some(shape) => table.declare(&token.text, shape.into(), token.span),
            None => {
                if token.kind == TokenKind::Identifier {
                    table.reference(&token.text, token.span);
                }
            }
        }
    }

    table
}
