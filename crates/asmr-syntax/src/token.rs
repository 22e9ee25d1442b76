use std::fmt;

use serde::Serialize;

/// Zero-based character position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open range: `end` points one past the last character of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Lexical class of a raw token.
///
/// Every character of the input belongs to exactly one token; runs the lexer
/// cannot classify are covered by `Unknown` rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier declaring a label: first on its line, immediately
    /// followed by a single `:`. The colon itself is `Punctuation`.
    Label,
    /// Recognized directive keyword (`db`, `resb`, `equ`, `proc`, `endp`).
    Directive,
    Identifier,
    Number,
    String,
    Comment,
    Punctuation,
    Whitespace,
    Newline,
    Unknown,
}

impl TokenKind {
    /// Whether the token carries code, as opposed to layout or commentary.
    pub fn is_significant(self) -> bool {
        !matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Label => "label",
            TokenKind::Directive => "directive",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl RawToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Length in characters, matching the column arithmetic of [`Span`].
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
