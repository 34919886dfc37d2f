// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Token kinds and the positioned token type.

use std::fmt;

use crate::pos::Pos;

/// Lexical classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of spaces and tabs, coalesced.
    Whitespace,
    /// A single line break.
    Newline,
    /// A bare name: `[A-Za-z_][A-Za-z0-9_]*`, not in the keyword table.
    Identifier,
    /// A double-quoted identifier, delimiters preserved in the value.
    QuotedIdentifier,
    /// A single-quoted string literal, delimiters preserved in the value.
    String,
    /// An integer or decimal literal.
    Number,
    /// Arithmetic operator: `+ - * / %`.
    Operator,
    /// Relational operator: `= != <> < <= > >=`.
    Comparison,
    Comma,
    Semicolon,
    Period,
    LParen,
    RParen,
    /// An identifier that matched the reserved vocabulary, original casing
    /// preserved in the value.
    Keyword,
    /// Anything the scanner does not recognize; carried opaquely.
    Unknown,
}

/// A lexical item with its original text and half-open source span
/// `[from, to)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub from: Pos,
    pub to: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, from: Pos, to: Pos) -> Self {
        Self {
            kind,
            value: value.into(),
            from,
            to,
        }
    }

    /// True for whitespace and newline tokens.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Newline)
    }

    /// True when this token is a keyword whose value equals `word`,
    /// case-insensitively.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value.eq_ignore_ascii_case(word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
