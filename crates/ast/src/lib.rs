// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # squill - AST Layer
//!
//! The lossless, position-indexed syntax tree produced by the parser.
//!
//! Two node families exist: a leaf [`Node::Item`] wrapping exactly one
//! token (whitespace and punctuation included), and composite
//! [`TokenList`]s holding an ordered child sequence. Reconstructing the
//! tree with `to_string()` reproduces the source byte-for-byte, which is
//! what lets the completion engine reason about half-typed SQL without a
//! separate source map.

pub mod matcher;
pub mod node;

pub use matcher::NodeMatcher;
pub use node::{ListKind, Node, TokenList};
