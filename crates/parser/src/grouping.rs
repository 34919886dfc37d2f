// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Statement splitting and the grouping passes.
//!
//! The token stream is first split into `Statement` nodes at semicolons.
//! Within each statement a fixed sequence of passes rewrites the child list
//! in place, each pass folding tokens into higher-level nodes:
//!
//! 1. parenthesis grouping (stack-based, unmatched `(` stays a bare item)
//! 2. function literals (name glued to a parenthesis)
//! 3. member identifiers (`a.b`, `a.*`, trailing `a.`)
//! 4. identifier promotion
//! 5. arithmetic / comparison grouping
//! 6. aliasing (`expr AS name`, and `name name` without `AS`)
//! 7. identifier lists (comma-separated)
//! 8. clause grouping (`FROM`, `JOIN` and friends, `WHERE`)
//!
//! Passes recurse into composite children before rewriting a level, so a
//! parenthesized subquery receives the same structure as a top-level
//! statement.

use squill_ast::{ListKind, Node, TokenList};
use squill_token::{is_function, tokenize, TokenKind};

/// Parse `input` into the root `Query` list.
///
/// Total over its input: never fails, never drops a byte.
pub fn parse(input: &str) -> TokenList {
    let mut statements = Vec::new();
    let mut current: Vec<Node> = Vec::new();
    for token in tokenize(input) {
        let is_semicolon = token.kind == TokenKind::Semicolon;
        current.push(Node::Item(token));
        if is_semicolon {
            statements.push(make_statement(std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        statements.push(make_statement(current));
    }
    TokenList::new(ListKind::Query, statements)
}

fn make_statement(children: Vec<Node>) -> Node {
    let mut statement = TokenList::new(ListKind::Statement, children);
    group_parenthesis(&mut statement);
    group_functions(&mut statement);
    group_members(&mut statement);
    promote_identifiers(&mut statement);
    group_operations(&mut statement);
    group_aliased(&mut statement);
    group_identifier_lists(&mut statement);
    group_clauses(&mut statement);
    Node::List(statement)
}

/// Pass 1: fold balanced `( ... )` ranges into `Parenthesis` nodes.
///
/// A right paren with no opener on the stack, or a left paren that never
/// closes, is left in place as a bare item (the parser "rewinds" by simply
/// not grouping).
fn group_parenthesis(list: &mut TokenList) {
    let mut out: Vec<Node> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for node in list.children.drain(..) {
        match node.token_kind() {
            Some(TokenKind::LParen) => {
                stack.push(out.len());
                out.push(node);
            }
            Some(TokenKind::RParen) => match stack.pop() {
                Some(start) => {
                    let mut children: Vec<Node> = out.drain(start..).collect();
                    children.push(node);
                    out.push(Node::list(ListKind::Parenthesis, children));
                }
                None => out.push(node),
            },
            _ => out.push(node),
        }
    }
    list.children = out;
}

fn recurse_lists(list: &mut TokenList, pass: fn(&mut TokenList)) {
    for child in &mut list.children {
        if let Node::List(inner) = child {
            pass(inner);
        }
    }
}

/// Pass 2: `name(` with no gap becomes a `FunctionLiteral`.
///
/// The name is a bare identifier or a keyword from the function table
/// (`DATE`, `LEFT`, ...).
fn group_functions(list: &mut TokenList) {
    recurse_lists(list, group_functions);
    let mut i = 0;
    while i + 1 < list.children.len() {
        let named = match list.children[i].as_item() {
            Some(token) => {
                token.kind == TokenKind::Identifier
                    || (token.kind == TokenKind::Keyword && is_function(&token.value))
            }
            None => false,
        };
        let glued = list.children[i].end() == list.children[i + 1].pos();
        if named && glued && list.children[i + 1].is_kind(ListKind::Parenthesis) {
            let taken: Vec<Node> = list.children.drain(i..=i + 1).collect();
            list.children
                .insert(i, Node::list(ListKind::FunctionLiteral, taken));
        }
        i += 1;
    }
}

fn is_name_token(node: &Node, kind_filter: fn(TokenKind) -> bool) -> bool {
    matches!(node.token_kind(), Some(kind) if kind_filter(kind))
}

/// Pass 3: `<name> . <name>`, `<name> . *` and the trailing `<name> .`
/// become `MemberIdentifier` nodes; chained periods group greedily.
fn group_members(list: &mut TokenList) {
    recurse_lists(list, group_members);
    let parent_name = |n: &Node| {
        is_name_token(n, |k| {
            matches!(k, TokenKind::Identifier | TokenKind::QuotedIdentifier)
        })
    };
    let child_name = |n: &Node| {
        is_name_token(n, |k| {
            matches!(k, TokenKind::Identifier | TokenKind::QuotedIdentifier)
        }) || matches!(n.as_item(), Some(t) if t.kind == TokenKind::Operator && t.value == "*")
    };
    let glued = |list: &TokenList, a: usize, b: usize| list.children[a].end() == list.children[b].pos();

    let mut i = 0;
    while i + 1 < list.children.len() {
        let starts = parent_name(&list.children[i])
            && list.children[i + 1].token_kind() == Some(TokenKind::Period)
            && glued(list, i, i + 1);
        if starts {
            let mut last = i + 1; // the period
            loop {
                let next = last + 1;
                if next < list.children.len()
                    && glued(list, last, next)
                    && child_name(&list.children[next])
                {
                    last = next;
                    let period = last + 1;
                    if period < list.children.len()
                        && glued(list, last, period)
                        && list.children[period].token_kind() == Some(TokenKind::Period)
                    {
                        last = period;
                        continue;
                    }
                }
                break;
            }
            let taken: Vec<Node> = list.children.drain(i..=last).collect();
            list.children
                .insert(i, Node::list(ListKind::MemberIdentifier, taken));
        }
        i += 1;
    }
}

/// Pass 4: a bare identifier token not otherwise grouped becomes an
/// `Identifier` node. Tokens already claimed by a member identifier or a
/// function name stay verbatim leaves.
fn promote_identifiers(list: &mut TokenList) {
    let skip_direct = matches!(
        list.kind,
        ListKind::MemberIdentifier | ListKind::FunctionLiteral
    );
    for i in 0..list.children.len() {
        if let Node::List(inner) = &mut list.children[i] {
            promote_identifiers(inner);
            continue;
        }
        if skip_direct {
            continue;
        }
        if matches!(
            list.children[i].token_kind(),
            Some(TokenKind::Identifier | TokenKind::QuotedIdentifier)
        ) {
            let item = list.children[i].clone();
            list.children[i] = Node::list(ListKind::Identifier, vec![item]);
        }
    }
}

fn is_operand(node: &Node) -> bool {
    node.is_identifier_like()
        || node.is_kind(ListKind::Operator)
        || matches!(
            node.token_kind(),
            Some(TokenKind::Number | TokenKind::String)
        )
}

fn prev_non_ws(children: &[Node], from: usize) -> Option<usize> {
    (0..from).rev().find(|&j| !children[j].is_whitespace())
}

fn next_non_ws(children: &[Node], from: usize) -> Option<usize> {
    (from + 1..children.len()).find(|&j| !children[j].is_whitespace())
}

/// Pass 5: three-node windows around an operator token fold into
/// `Operator` (arithmetic) or `Comparison` (relational) nodes, whitespace
/// absorbed. Scanning is left-to-right so chains nest naturally.
fn group_operations(list: &mut TokenList) {
    recurse_lists(list, group_operations);
    let mut i = 0;
    while i < list.children.len() {
        let kind = match list.children[i].token_kind() {
            Some(TokenKind::Operator) => Some(ListKind::Operator),
            Some(TokenKind::Comparison) => Some(ListKind::Comparison),
            _ => None,
        };
        if let Some(kind) = kind {
            let left = prev_non_ws(&list.children, i).filter(|&j| is_operand(&list.children[j]));
            let right = next_non_ws(&list.children, i).filter(|&j| is_operand(&list.children[j]));
            if let (Some(li), Some(ri)) = (left, right) {
                let taken: Vec<Node> = list.children.drain(li..=ri).collect();
                list.children.insert(li, Node::list(kind, taken));
                i = li;
            }
        }
        i += 1;
    }
}

/// Pass 6: aliasing. The explicit `<expr> AS <identifier>` form wins;
/// the implicit `<name> <name>` form applies only when the left side is a
/// plain identifier or a complete member identifier, so `(y2) bar` and
/// `id DESC` stay ungrouped.
fn group_aliased(list: &mut TokenList) {
    recurse_lists(list, group_aliased);

    let mut i = 0;
    while i < list.children.len() {
        if list.children[i].is_keyword("AS") {
            let left = prev_non_ws(&list.children, i)
                .filter(|&j| list.children[j].is_identifier_like() || list.children[j].is_kind(ListKind::Operator));
            let right =
                next_non_ws(&list.children, i).filter(|&j| list.children[j].is_kind(ListKind::Identifier));
            if let (Some(li), Some(ri)) = (left, right) {
                let taken: Vec<Node> = list.children.drain(li..=ri).collect();
                list.children.insert(li, Node::list(ListKind::Aliased, taken));
                i = li;
            }
        }
        i += 1;
    }

    let mut i = 0;
    while i < list.children.len() {
        let left_ok = list.children[i].is_kind(ListKind::Identifier)
            || (list.children[i].is_kind(ListKind::MemberIdentifier)
                && !list.children[i].is_incomplete_member());
        if left_ok {
            if let Some(ri) = next_non_ws(&list.children, i)
                .filter(|&j| j > i + 1 && list.children[j].is_kind(ListKind::Identifier))
            {
                let taken: Vec<Node> = list.children.drain(i..=ri).collect();
                list.children.insert(i, Node::list(ListKind::Aliased, taken));
            }
        }
        i += 1;
    }
}

/// Pass 7: two or more identifier-like nodes separated by commas collapse
/// into one `IdentifierList`; separators and inner whitespace ride along.
fn group_identifier_lists(list: &mut TokenList) {
    recurse_lists(list, group_identifier_lists);
    let mut i = 0;
    while i < list.children.len() {
        if list.children[i].is_identifier_like() {
            let mut last = i;
            loop {
                let comma = match next_non_ws(&list.children, last) {
                    Some(j) if list.children[j].token_kind() == Some(TokenKind::Comma) => j,
                    _ => break,
                };
                match next_non_ws(&list.children, comma) {
                    Some(j) if list.children[j].is_identifier_like() => last = j,
                    _ => break,
                }
            }
            if last > i {
                let taken: Vec<Node> = list.children.drain(i..=last).collect();
                list.children
                    .insert(i, Node::list(ListKind::IdentifierList, taken));
            }
        }
        i += 1;
    }
}

const JOIN_MODIFIERS: &[&str] = &["LEFT", "RIGHT", "INNER", "OUTER", "FULL", "CROSS"];

/// Keywords that open (and therefore terminate) a clause at the same depth.
const CLAUSE_KEYWORDS: &[&str] = &[
    "FROM", "WHERE", "JOIN", "ON", "ORDER", "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION",
    "EXCEPT", "INTERSECT", "SET", "SELECT", "VALUES", "INTO", "UPDATE", "DELETE", "INSERT",
];

/// For a `[LEFT|RIGHT|...]* JOIN` run starting at `i`, the index of the
/// `JOIN` keyword itself.
fn join_anchor_end(children: &[Node], i: usize) -> Option<usize> {
    let mut k = i;
    loop {
        let node = children.get(k)?;
        if node.is_keyword("JOIN") {
            return Some(k);
        }
        if !JOIN_MODIFIERS.iter().any(|m| node.is_keyword(m)) {
            return None;
        }
        k += 1;
        while children.get(k).is_some_and(Node::is_whitespace) {
            k += 1;
        }
    }
}

fn clause_anchor(children: &[Node], i: usize) -> Option<(ListKind, usize)> {
    let node = &children[i];
    if node.is_keyword("FROM") {
        return Some((ListKind::FromClause, i));
    }
    if node.is_keyword("WHERE") {
        return Some((ListKind::WhereClause, i));
    }
    join_anchor_end(children, i).map(|end| (ListKind::JoinClause, end))
}

fn is_clause_terminator(children: &[Node], j: usize) -> bool {
    let node = &children[j];
    if matches!(
        node.token_kind(),
        Some(TokenKind::Semicolon | TokenKind::RParen)
    ) {
        return true;
    }
    if CLAUSE_KEYWORDS.iter().any(|k| node.is_keyword(k)) {
        return true;
    }
    join_anchor_end(children, j).is_some()
}

/// Pass 8: clause grouping. Each anchor collects itself plus everything up
/// to (but not including) the next clause keyword at the same depth, so
/// trailing whitespace after `from ` stays inside the clause.
fn group_clauses(list: &mut TokenList) {
    recurse_lists(list, group_clauses);
    let mut i = 0;
    while i < list.children.len() {
        if let Some((kind, anchor_end)) = clause_anchor(&list.children, i) {
            let mut j = anchor_end + 1;
            while j < list.children.len() && !is_clause_terminator(&list.children, j) {
                j += 1;
            }
            let taken: Vec<Node> = list.children.drain(i..j).collect();
            list.children.insert(i, Node::list(kind, taken));
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statements(input: &str) -> Vec<TokenList> {
        parse(input)
            .children
            .into_iter()
            .map(|n| match n {
                Node::List(list) => list,
                Node::Item(t) => panic!("top level item {t:?}"),
            })
            .collect()
    }

    #[test]
    fn lossless_parse_of_arbitrary_fragments() {
        let inputs = [
            "select * from foo where bar = 1 order by id desc",
            "select (select (x3) x2 and (y2) bar",
            "insert into t values (1, 'x');",
            ";;",
            "@@@ select ???",
            "select co",
        ];
        for input in inputs {
            assert_eq!(parse(input).to_string(), input, "input {input:?}");
        }
    }

    #[test]
    fn statements_split_on_semicolon() {
        let stmts = statements("select 1;select 2;select 3");
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[0].to_string(), "select 1;");
        assert_eq!(stmts[2].to_string(), "select 3");
    }

    #[test]
    fn unmatched_parens_stay_items() {
        let stmts = statements("select (select (x3) x2 and (y2) bar");
        let children = &stmts[0].children;
        // `(` at index 2 never closes and must remain a bare item
        assert_eq!(children[2].token_kind(), Some(TokenKind::LParen));
        assert!(children[5].is_kind(ListKind::Parenthesis));
        assert_eq!(children[5].to_string(), "(x3)");
    }

    #[test]
    fn function_requires_adjacency() {
        let glued = statements("foo()");
        assert!(glued[0].children[0].is_kind(ListKind::FunctionLiteral));

        let spaced = statements("foo ()");
        assert!(spaced[0].children[0].is_kind(ListKind::Identifier));
        assert!(spaced[0].children[2].is_kind(ListKind::Parenthesis));
    }

    #[test]
    fn member_chain_groups_greedily() {
        let stmts = statements("a.b.c");
        let member = &stmts[0].children[0];
        assert!(member.is_kind(ListKind::MemberIdentifier));
        assert_eq!(member.to_string(), "a.b.c");
    }

    #[test]
    fn keyword_not_aliased() {
        // DESC is a keyword, so `id desc` must not group as an alias
        let stmts = statements("select * from foo order by id desc");
        let text: Vec<String> = stmts[0].children.iter().map(|c| c.to_string()).collect();
        assert!(text.contains(&"desc".to_string()));
    }
}
