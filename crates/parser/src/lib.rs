// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # squill - Parser Layer
//!
//! Recursive-descent grouping over the token stream.
//!
//! The parser is total over text: any input, however broken, produces a
//! lossless tree. It stops grouping when no pattern matches and leaves
//! residual tokens as bare items, which is exactly what the completion
//! engine needs for mid-edit SQL. The only failure mode is an I/O error
//! from the reader entry point.
//!
//! ## Modules
//!
//! - [`grouping`]: statement splitting and the grouping passes
//! - [`walker`]: cursor-position path construction and keyword lookback
//! - [`extract`]: tables, aliases and subquery projections in scope

pub mod extract;
pub mod grouping;
pub mod walker;

use std::io::Read;

use squill_ast::TokenList;

pub use extract::{extract_tables, is_subquery, TableReference};
pub use grouping::parse;
pub use walker::NodeWalker;

/// Errors from the parser entry points.
///
/// Parsing itself cannot fail; only reading source text can.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read SQL source: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse SQL from a reader.
///
/// Returns an error only when reading fails; the parse itself is total.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<TokenList, ParseError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(parse(&source))
}
