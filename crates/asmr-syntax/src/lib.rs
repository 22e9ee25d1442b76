#![deny(clippy::unwrap_used)]

mod classify;
mod dialect;
mod lexer;
mod token;


pub use classify::{declaration_shape, significant_indices, DeclShape};
pub use dialect::{Dialect, BUILTIN_FUNCTIONS, DATA_DIRECTIVES, PROC_DIRECTIVES};
pub use lexer::{tokenize, tokenize_with};
pub use token::{Position, RawToken, Span, TokenKind};
