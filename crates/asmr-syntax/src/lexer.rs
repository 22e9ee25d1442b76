//! Single-pass lexer for ASMR source text.
//!
//! The lexer never fails: runs it cannot classify become [`TokenKind::Unknown`]
//! tokens, so concatenating the token texts always reconstructs the input
//! exactly, whitespace and comments included.

use crate::dialect::Dialect;
use crate::token::{Position, RawToken, Span, TokenKind};

/// Single characters lexed as `Punctuation`.
const PUNCTUATION: &[char] = &[
    ',', ':', '[', ']', '(', ')', '{', '}', '+', '-', '*', '/', '=', '<', '>', '!', '&', '|', '%',
    '^', '~', '?', '@', '#', '$',
];

/// Tokenize with the default dialect tables.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    tokenize_with(text, &Dialect::default())
}

/// Tokenize with an explicit dialect.
pub fn tokenize_with(text: &str, dialect: &Dialect) -> Vec<RawToken> {
    Lexer::new(text, dialect).run()
}

struct Lexer<'d> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    /// Whether a significant token has already been emitted on the current
    /// line; a label must be the first one.
    line_has_code: bool,
    dialect: &'d Dialect,
    tokens: Vec<RawToken>,
}

impl<'d> Lexer<'d> {
    fn new(text: &str, dialect: &'d Dialect) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            line: 0,
            column: 0,
            line_has_code: false,
            dialect,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<RawToken> {
        while let Some(ch) = self.peek() {
            let start = self.position();
            let start_pos = self.pos;
            if ch == '\n' {
                self.advance();
                self.push(TokenKind::Newline, start_pos, start);
                self.line_has_code = false;
            } else if matches!(ch, ' ' | '\t' | '\r') {
                while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
                    self.advance();
                }
                self.push(TokenKind::Whitespace, start_pos, start);
            } else if ch == self.dialect.comment_marker {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                self.push(TokenKind::Comment, start_pos, start);
            } else if ch == '"' {
                self.lex_string(start_pos, start);
            } else if ch.is_ascii_digit() {
                self.lex_number(start_pos, start);
            } else if is_identifier_start(ch) {
                self.lex_identifier(start_pos, start);
            } else if PUNCTUATION.contains(&ch) {
                self.advance();
                self.push(TokenKind::Punctuation, start_pos, start);
            } else {
                while self.peek().is_some_and(|c| self.is_unclassified(c)) {
                    self.advance();
                }
                self.push(TokenKind::Unknown, start_pos, start);
            }
        }
        self.tokens
    }

    /// A double-quoted, single-line string. An unterminated string degrades
    /// to `Unknown` covering the rest of the line.
    fn lex_string(&mut self, start_pos: usize, start: Position) {
        self.advance();
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    self.push(TokenKind::String, start_pos, start);
                    return;
                }
                Some('\n') | None => {
                    self.push(TokenKind::Unknown, start_pos, start);
                    return;
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Decimal or `0x` hex literal. A malformed literal (`0xq`, `12ab`)
    /// degrades to `Unknown` covering the whole run.
    fn lex_number(&mut self, start_pos: usize, start: Position) {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }
        let text: String = self.chars[start_pos..self.pos].iter().collect();
        let kind = if is_number_literal(&text) {
            TokenKind::Number
        } else {
            TokenKind::Unknown
        };
        self.push(kind, start_pos, start);
    }

    /// Identifier, directive keyword, or label. `::` continues an identifier
    /// when followed by another identifier character, so `asmr::io::print`
    /// lexes as one token; a single `:` never does.
    fn lex_identifier(&mut self, start_pos: usize, start: Position) {
        let first_on_line = !self.line_has_code;
        self.advance();
        loop {
            match self.peek() {
                Some(c) if is_identifier_continue(c) => self.advance(),
                Some(':')
                    if self.peek_at(1) == Some(':')
                        && self.peek_at(2).is_some_and(is_identifier_continue) =>
                {
                    self.advance();
                    self.advance();
                }
                _ => break,
            }
        }
        let text: String = self.chars[start_pos..self.pos].iter().collect();
        let kind = if self.dialect.is_directive(&text) {
            TokenKind::Directive
        } else if first_on_line && self.peek() == Some(':') {
            TokenKind::Label
        } else {
            TokenKind::Identifier
        };
        self.push(kind, start_pos, start);
    }

    fn push(&mut self, kind: TokenKind, start_pos: usize, start: Position) {
        let text: String = self.chars[start_pos..self.pos].iter().collect();
        if kind.is_significant() {
            self.line_has_code = true;
        }
        self.tokens
            .push(RawToken::new(kind, text, Span::new(start, self.position())));
    }

    fn is_unclassified(&self, c: char) -> bool {
        c != '\n'
            && !matches!(c, ' ' | '\t' | '\r')
            && c != self.dialect.comment_marker
            && c != '"'
            && !c.is_ascii_digit()
            && !is_identifier_start(c)
            && !PUNCTUATION.contains(&c)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(&ch) = self.chars.get(self.pos) {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '.'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_number_literal(text: &str) -> bool {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    text.chars().all(|c| c.is_ascii_digit())
}
