// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Cursor-position walking.
//!
//! Given a parsed tree and a cursor position, [`NodeWalker`] records the
//! path from the root to the deepest node whose span contains the cursor.
//! When the cursor sits exactly on a boundary between two siblings the
//! node to its left wins, so typing immediately after `from ` still lands
//! inside the `FromClause`.

use squill_ast::{ListKind, Node, NodeMatcher, TokenList};
use squill_token::Pos;

/// One level of the walk: the list and the index of the child on the path.
#[derive(Debug, Clone, Copy)]
pub struct PathStep<'a> {
    pub list: &'a TokenList,
    pub index: usize,
}

impl<'a> PathStep<'a> {
    pub fn node(&self) -> &'a Node {
        &self.list.children[self.index]
    }
}

/// Root-to-leaf path for a cursor position.
#[derive(Debug)]
pub struct NodeWalker<'a> {
    path: Vec<PathStep<'a>>,
}

impl<'a> NodeWalker<'a> {
    pub fn new(root: &'a TokenList, pos: Pos) -> Self {
        let mut path = Vec::new();
        let mut current = root;
        loop {
            if current.children.is_empty() {
                break;
            }
            let index = locate(current, pos);
            path.push(PathStep {
                list: current,
                index,
            });
            match &current.children[index] {
                Node::List(inner) => current = inner,
                Node::Item(_) => break,
            }
        }
        Self { path }
    }

    /// The deepest node on the path, if the tree was non-empty.
    pub fn cur_node(&self) -> Option<&'a Node> {
        self.path.last().map(PathStep::node)
    }

    /// Index of the statement containing the cursor within the root list.
    pub fn statement_index(&self) -> Option<usize> {
        self.path
            .iter()
            .find(|step| step.list.kind == ListKind::Query)
            .map(|step| step.index)
    }

    /// The innermost ancestor list of the given kind, deepest first.
    pub fn nearest_list(&self, kind: ListKind) -> Option<&'a TokenList> {
        self.path
            .iter()
            .rev()
            .map(|step| step.list)
            .find(|list| list.kind == kind)
    }

    /// Innermost ancestor list satisfying `pred`, deepest first.
    pub fn nearest_list_where(
        &self,
        pred: impl Fn(&TokenList) -> bool,
    ) -> Option<&'a TokenList> {
        self.path
            .iter()
            .rev()
            .map(|step| step.list)
            .find(|list| pred(list))
    }

    /// True when `matcher` matches any node preceding the cursor within its
    /// clause scope.
    ///
    /// Levels are consulted from the deepest outward; the search stops
    /// after the nearest enclosing clause scope (statement, parenthesis, or
    /// clause node), which implements "a preceding keyword anywhere earlier
    /// in the same clause".
    pub fn prev_nodes_is(&self, ignore_whitespace: bool, matcher: &NodeMatcher) -> bool {
        for step in self.path.iter().rev() {
            let prev: Vec<&Node> = step.list.children[..step.index]
                .iter()
                .filter(|n| !ignore_whitespace || !n.is_whitespace())
                .collect();
            if matcher.matches_any(&prev) {
                return true;
            }
            if step.list.kind.is_clause_scope() {
                break;
            }
        }
        false
    }
}

/// Choose the child of `list` for position `pos`.
///
/// First child whose span contains `pos` wins, which resolves boundary ties
/// to the left. A position past the last child resolves to the last child
/// (the node immediately to the cursor's left).
fn locate(list: &TokenList, pos: Pos) -> usize {
    list.children
        .iter()
        .position(|child| child.contains(pos))
        .unwrap_or_else(|| {
            if pos < list.children[0].pos() {
                0
            } else {
                list.children.len() - 1
            }
        })
}
