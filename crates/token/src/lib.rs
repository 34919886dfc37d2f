// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # squill - Token Layer
//!
//! Lexical analysis for the squill SQL language server.
//!
//! This crate turns raw SQL text into a linear stream of positioned tokens.
//! The scanner is total: malformed input never produces an error, it
//! produces opaque tokens the parser can carry along. This matters because
//! the server's input is almost always mid-edit SQL.
//!
//! ## Modules
//!
//! - [`pos`]: source positions (1-based line, 0-based column)
//! - [`token`]: token kinds and the positioned [`Token`] type
//! - [`scanner`]: the tokenizer itself
//! - [`keywords`]: the reserved vocabulary and recognized function names

pub mod keywords;
pub mod pos;
pub mod scanner;
pub mod token;

pub use keywords::{is_function, is_keyword, FUNCTIONS, KEYWORDS};
pub use pos::Pos;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Tokenize `input` in one call.
///
/// Convenience wrapper over [`Scanner`]; never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).scan()
}
