// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion engine.
//!
//! ## Flow
//!
//! ```text
//! 1. parse the full document text (total, never fails)
//! 2. walk to the cursor, pick the statement and scope
//! 3. classify the context (permitted completion kinds)
//! 4. extract relations in scope (tables, aliases, subqueries)
//! 5. synthesize and rank candidates against the schema cache
//! ```
//!
//! The engine performs no I/O and cannot fail: any text yields a (possibly
//! empty) candidate list, matching the "best effort over mid-edit SQL"
//! contract of the parser underneath.

pub mod candidates;
pub mod context;
pub mod keywords;

use std::sync::Arc;

use squill_ast::ListKind;
use squill_catalog::SchemaCache;
use squill_parser::{extract_tables, is_subquery, NodeWalker, TableReference};
use squill_token::Pos;
use tower_lsp::lsp_types::{CompletionItem, Position};
use tracing::debug;

pub use context::{classify, CompletionContext, CompletionType};

/// Schema-aware completion over a parsed document.
pub struct CompletionEngine {
    cache: Arc<SchemaCache>,
}

impl CompletionEngine {
    pub fn new(cache: Arc<SchemaCache>) -> Self {
        Self { cache }
    }

    /// Complete at `position` (LSP wire coordinates) in `text`.
    pub fn complete(&self, text: &str, position: Position) -> Vec<CompletionItem> {
        // wire positions are 0-based lines; the core is 1-based
        let pos = Pos::new(position.line + 1, position.character);
        let root = squill_parser::parse(text);

        let walker = NodeWalker::new(&root, pos);
        let ctx = classify(&walker);
        let tables = self.tables_in_scope(&walker);
        let word = last_word(text, position);
        debug!(types = ?ctx.types, qualifier = ?ctx.qualifier, word = %word, "classified completion context");

        candidates::build(&ctx, &tables, &self.cache, &word)
    }

    /// Relations visible at the cursor: the innermost subquery scope wins
    /// over the enclosing statement.
    fn tables_in_scope(&self, walker: &NodeWalker) -> Vec<TableReference> {
        let scope = walker
            .nearest_list_where(|list| list.kind == ListKind::Parenthesis && is_subquery(list))
            .or_else(|| walker.nearest_list(ListKind::Statement));
        scope.map(extract_tables).unwrap_or_default()
    }
}

/// The word fragment immediately preceding the cursor: the longest
/// `[A-Za-z0-9_]+` run terminating at the cursor, empty when the previous
/// character is not a word character.
fn last_word(text: &str, position: Position) -> String {
    let Some(line) = text.lines().nth(position.line as usize) else {
        return String::new();
    };
    let chars: Vec<char> = line.chars().collect();
    let cursor = (position.character as usize).min(chars.len());
    let start = chars[..cursor]
        .iter()
        .rposition(|c| !c.is_ascii_alphanumeric() && *c != '_')
        .map(|i| i + 1)
        .unwrap_or(0);
    chars[start..cursor].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_word_at_fragment_end() {
        let pos = Position::new(0, 26);
        assert_eq!(last_word("select CountryCode from co", pos), "co");
    }

    #[test]
    fn last_word_empty_after_space_or_period() {
        assert_eq!(last_word("select  from city", Position::new(0, 7)), "");
        assert_eq!(last_word("select c. from x", Position::new(0, 9)), "");
    }

    #[test]
    fn last_word_mid_token() {
        assert_eq!(last_word("select Cou from city", Position::new(0, 10)), "Cou");
    }

    #[test]
    fn last_word_on_later_line() {
        assert_eq!(last_word("select *\nfrom co", Position::new(1, 7)), "co");
    }

    #[test]
    fn last_word_past_line_end_clamps() {
        assert_eq!(last_word("ab", Position::new(0, 99)), "ab");
        assert_eq!(last_word("ab", Position::new(3, 0)), "");
    }
}
