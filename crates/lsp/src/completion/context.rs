// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Completion context classification.
//!
//! Given the walker's view of the cursor, decide which kinds of
//! completions are permitted. Rules fire on a keyword found earlier in the
//! same clause; the first matching row wins. Independently of the rows, a
//! cursor inside (or immediately after) a member identifier records its
//! left-hand name so candidates can be narrowed to one relation's columns.

use squill_ast::{ListKind, NodeMatcher, TokenList};
use squill_parser::NodeWalker;

/// Kinds of completion the classifier can permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionType {
    Keyword,
    Function,
    Alias,
    Column,
    Table,
    View,
    Change,
    User,
    Database,
}

/// The classified cursor context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    /// Permitted completion kinds, most significant first.
    pub types: Vec<CompletionType>,
    /// Left-hand name of a member identifier at the cursor (`c` in `c.`),
    /// narrowing candidates to that relation's columns.
    pub qualifier: Option<String>,
}

impl CompletionContext {
    fn of(types: &[CompletionType], qualifier: Option<String>) -> Self {
        Self {
            types: types.to_vec(),
            qualifier,
        }
    }

    pub fn permits(&self, ty: CompletionType) -> bool {
        self.types.contains(&ty)
    }
}

const COLUMN_LEVEL: &[&str] = &[
    "SELECT", "WHERE", "HAVING", "GROUP BY", "ORDER BY", "SET", "DISTINCT",
];
const TABLE_LEVEL: &[&str] = &[
    "FROM", "JOIN", "UPDATE", "INTO", "DESCRIBE", "TRUNCATE", "COPY",
];
const ON_LEVEL: &[&str] = &["ON"];
const DATABASE_LEVEL: &[&str] = &["USE", "DATABASE", "CONNECT", "TEMPLATE"];
const USER_LEVEL: &[&str] = &["USER", "FOR"];
const CHANGE_LEVEL: &[&str] = &["TO"];

/// Classify the completion context at the walker's cursor.
pub fn classify(walker: &NodeWalker) -> CompletionContext {
    use CompletionType::*;

    let qualifier = member_qualifier(walker);
    let matches = |words: &[&'static str]| {
        walker.prev_nodes_is(true, &NodeMatcher::keywords(words))
    };

    if matches(COLUMN_LEVEL) {
        return CompletionContext::of(&[Column, Alias, Table, View, Function], qualifier);
    }
    if matches(TABLE_LEVEL) {
        return CompletionContext::of(&[Table, View, Function], qualifier);
    }
    if matches(ON_LEVEL) {
        return CompletionContext::of(&[Column, Table, View, Function], qualifier);
    }
    if matches(DATABASE_LEVEL) {
        return CompletionContext::of(&[Database], qualifier);
    }
    if matches(USER_LEVEL) {
        return CompletionContext::of(&[User], qualifier);
    }
    if matches(CHANGE_LEVEL) {
        return CompletionContext::of(&[Change], qualifier);
    }
    CompletionContext::of(&[Keyword], qualifier)
}

/// The left-hand name of a member identifier on the cursor path.
fn member_qualifier(walker: &NodeWalker) -> Option<String> {
    let member = walker.nearest_list(ListKind::MemberIdentifier)?;
    parent_name(member)
}

fn parent_name(member: &TokenList) -> Option<String> {
    let first = member.children.first()?;
    first
        .as_item()
        .map(|token| squill_ast::node::unquote(&token.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use squill_parser::parse;
    use squill_token::Pos;

    fn classify_at(input: &str, col: u32) -> CompletionContext {
        let root = parse(input);
        let walker = NodeWalker::new(&root, Pos::new(1, col));
        classify(&walker)
    }

    #[test]
    fn select_projection_permits_columns_and_tables() {
        let ctx = classify_at("select  from city", 7);
        assert!(ctx.permits(CompletionType::Column));
        assert!(ctx.permits(CompletionType::Table));
        assert!(ctx.permits(CompletionType::Function));
        assert!(!ctx.permits(CompletionType::Keyword));
        assert_eq!(ctx.qualifier, None);
    }

    #[test]
    fn from_clause_permits_tables_only() {
        let ctx = classify_at("select CountryCode from ", 24);
        assert!(ctx.permits(CompletionType::Table));
        assert!(ctx.permits(CompletionType::View));
        assert!(!ctx.permits(CompletionType::Column));
    }

    #[test]
    fn join_clause_permits_tables_only() {
        let ctx = classify_at("select CountryCode from city left join ", 39);
        assert!(ctx.permits(CompletionType::Table));
        assert!(!ctx.permits(CompletionType::Column));
    }

    #[test]
    fn where_clause_permits_columns() {
        let ctx = classify_at("select * from foo where ", 24);
        assert!(ctx.permits(CompletionType::Column));
    }

    #[test]
    fn order_by_and_group_by_permit_columns() {
        let ctx = classify_at("SELECT ID, Name FROM city ORDER BY ", 35);
        assert!(ctx.permits(CompletionType::Column));
        let ctx = classify_at("SELECT CountryCode, COUNT(*) FROM city GROUP BY ", 48);
        assert!(ctx.permits(CompletionType::Column));
    }

    #[test]
    fn member_identifier_sets_qualifier() {
        let ctx = classify_at("select c. from city as c", 9);
        assert_eq!(ctx.qualifier.as_deref(), Some("c"));
        assert!(ctx.permits(CompletionType::Column));
    }

    #[test]
    fn statement_start_falls_back_to_keywords() {
        let ctx = classify_at("sel", 3);
        assert_eq!(ctx.types, vec![CompletionType::Keyword]);
    }

    #[test]
    fn use_statement_permits_databases() {
        let ctx = classify_at("use ", 4);
        assert_eq!(ctx.types, vec![CompletionType::Database]);
    }

    #[test]
    fn change_master_to_permits_change() {
        let ctx = classify_at("change master to ", 17);
        assert_eq!(ctx.types, vec![CompletionType::Change]);
    }

    #[test]
    fn subquery_select_uses_inner_context() {
        let ctx = classify_at("SELECT * FROM (SELECT Cou FROM city)", 25);
        assert!(ctx.permits(CompletionType::Column));
    }
}
