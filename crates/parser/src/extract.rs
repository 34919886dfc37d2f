// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Table and alias extraction.
//!
//! Walks a parsed scope and collects the relations its `FROM`/`JOIN`
//! clauses bring into play: plain tables, aliased tables, comma lists, and
//! subqueries. A subquery contributes its projected column names (alias,
//! else rightmost member name) to the enclosing scope rather than the
//! tables it reads from.

use squill_ast::{ListKind, Node, TokenList};
use squill_token::TokenKind;

/// One relation visible in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReference {
    /// Table name; `None` for subqueries.
    pub name: Option<String>,
    /// Alias, when one was written.
    pub alias: Option<String>,
    /// True for a parenthesized `SELECT` in FROM.
    pub is_subquery: bool,
    /// Projected column names of a subquery.
    pub projections: Vec<String>,
}

impl TableReference {
    fn table(name: String) -> Self {
        Self {
            name: Some(name),
            alias: None,
            is_subquery: false,
            projections: Vec::new(),
        }
    }

    fn aliased(name: String, alias: String) -> Self {
        Self {
            name: Some(name),
            alias: Some(alias),
            is_subquery: false,
            projections: Vec::new(),
        }
    }

    fn subquery(alias: Option<String>, projections: Vec<String>) -> Self {
        Self {
            name: None,
            alias,
            is_subquery: true,
            projections,
        }
    }

    /// True when `word` is this relation's alias, case-insensitively.
    pub fn alias_is(&self, word: &str) -> bool {
        matches!(&self.alias, Some(alias) if alias.eq_ignore_ascii_case(word))
    }

    /// True when `word` is this relation's table name, case-insensitively.
    pub fn name_is(&self, word: &str) -> bool {
        matches!(&self.name, Some(name) if name.eq_ignore_ascii_case(word))
    }
}

/// True for a `Parenthesis` whose first meaningful token is `SELECT`.
pub fn is_subquery(list: &TokenList) -> bool {
    if list.kind != ListKind::Parenthesis {
        return false;
    }
    // children lead with the `(` leaf; the next meaningful node decides
    list.non_whitespace().nth(1).is_some_and(|n| n.is_keyword("SELECT"))
}

/// Collect the relations referenced by the `FROM`/`JOIN` clauses of
/// `scope` (a statement or a subquery parenthesis body).
pub fn extract_tables(scope: &TokenList) -> Vec<TableReference> {
    let mut out = Vec::new();
    for child in &scope.children {
        if let Some(list) = child.as_list() {
            if matches!(list.kind, ListKind::FromClause | ListKind::JoinClause) {
                collect_clause(list, &mut out);
            }
        }
    }
    out
}

fn collect_clause(clause: &TokenList, out: &mut Vec<TableReference>) {
    for node in clause.non_whitespace() {
        match node {
            // anchor keywords (`FROM`, `LEFT`, `JOIN`, ...) and stray items
            Node::Item(_) => {
                // a bare identifier right after a subquery is its alias;
                // identifiers themselves were promoted, so nothing here
            }
            Node::List(list) => collect_relation(node, list, out),
        }
    }
}

fn collect_relation(node: &Node, list: &TokenList, out: &mut Vec<TableReference>) {
    match list.kind {
        ListKind::Identifier => {
            let name = node.identifier_name().unwrap_or_default();
            // pair with a preceding alias-less subquery (`(...) t` form)
            if let Some(last) = out.last_mut() {
                if last.is_subquery && last.alias.is_none() {
                    last.alias = Some(name);
                    return;
                }
            }
            out.push(TableReference::table(name));
        }
        ListKind::MemberIdentifier => {
            let name = node
                .member_child_name()
                .or_else(|| node.member_parent_name());
            if let Some(name) = name {
                out.push(TableReference::table(name));
            }
        }
        ListKind::Aliased => {
            if let Some(entry) = from_aliased(list) {
                out.push(entry);
            }
        }
        ListKind::Parenthesis if is_subquery(list) => {
            out.push(TableReference::subquery(None, projections(list)));
        }
        ListKind::IdentifierList => {
            for element in list.non_whitespace() {
                if element.token_kind() == Some(TokenKind::Comma) {
                    continue;
                }
                if let Some(inner) = element.as_list() {
                    collect_relation(element, inner, out);
                }
            }
        }
        _ => {}
    }
}

fn from_aliased(aliased: &TokenList) -> Option<TableReference> {
    let left = aliased.non_whitespace().next()?;
    let alias = aliased
        .non_whitespace()
        .last()
        .and_then(Node::identifier_name)?;
    match left.list_kind() {
        Some(ListKind::Identifier) => Some(TableReference::aliased(left.identifier_name()?, alias)),
        Some(ListKind::MemberIdentifier) => {
            let name = left.member_child_name().or_else(|| left.member_parent_name())?;
            Some(TableReference::aliased(name, alias))
        }
        Some(ListKind::Parenthesis) => {
            let paren = left.as_list()?;
            if !is_subquery(paren) {
                return None;
            }
            Some(TableReference::subquery(Some(alias), projections(paren)))
        }
        _ => None,
    }
}

/// The projected column names of a subquery parenthesis: everything in the
/// select-list, named by alias when present, else by the rightmost member
/// name. `*` projects nothing nameable.
fn projections(paren: &TokenList) -> Vec<String> {
    let mut names = Vec::new();
    let mut in_select_list = false;
    for node in paren.non_whitespace() {
        if node.is_keyword("SELECT") {
            in_select_list = true;
            continue;
        }
        if !in_select_list {
            continue;
        }
        if node.is_keyword("FROM")
            || node.is_kind(ListKind::FromClause)
            || node.token_kind() == Some(TokenKind::RParen)
        {
            break;
        }
        collect_projection(node, &mut names);
    }
    names
}

fn collect_projection(node: &Node, names: &mut Vec<String>) {
    if let Some(list) = node.as_list() {
        if list.kind == ListKind::IdentifierList {
            for element in list.non_whitespace() {
                if element.token_kind() != Some(TokenKind::Comma) {
                    collect_projection(element, names);
                }
            }
            return;
        }
    }
    if let Some(name) = projection_name(node) {
        names.push(name);
    }
}

fn projection_name(node: &Node) -> Option<String> {
    match node.list_kind()? {
        ListKind::Identifier => node.identifier_name(),
        ListKind::MemberIdentifier => node.member_child_name().filter(|n| n != "*"),
        ListKind::Aliased => node
            .as_list()?
            .non_whitespace()
            .last()
            .and_then(Node::identifier_name),
        _ => None,
    }
}
