// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Node variants of the lossless tree.

use std::fmt;

use squill_token::{Pos, Token, TokenKind};

/// Classification of a composite node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// The root; children are `Statement` nodes.
    Query,
    /// One statement, ending at a semicolon or EOF.
    Statement,
    /// `( ... )`, delimiters included as leaf children.
    Parenthesis,
    /// An identifier (or function-naming keyword) glued to a parenthesis.
    FunctionLiteral,
    /// `a.b`, `a.*`, or the incomplete `a.`.
    MemberIdentifier,
    /// A single promoted name token.
    Identifier,
    /// Two or more identifier-like nodes separated by commas.
    IdentifierList,
    /// `<expr> [AS] <identifier>`.
    Aliased,
    /// `<operand> <op> <operand>` with an arithmetic operator.
    Operator,
    /// `<operand> <cmp> <operand>` with a relational operator.
    Comparison,
    FromClause,
    JoinClause,
    WhereClause,
}

impl ListKind {
    /// Kinds that bound a completion scope: previous-sibling keyword
    /// matching stops at the nearest of these.
    pub fn is_clause_scope(self) -> bool {
        matches!(
            self,
            ListKind::Statement
                | ListKind::Parenthesis
                | ListKind::FromClause
                | ListKind::JoinClause
                | ListKind::WhereClause
        )
    }
}

/// A composite node: an ordered, non-empty sequence of children.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenList {
    pub kind: ListKind,
    pub children: Vec<Node>,
}

impl TokenList {
    pub fn new(kind: ListKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn pos(&self) -> Pos {
        self.children.first().map(Node::pos).unwrap_or_default()
    }

    pub fn end(&self) -> Pos {
        self.children.last().map(Node::end).unwrap_or_default()
    }

    /// Children that are not whitespace leaves, in order.
    pub fn non_whitespace(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| !n.is_whitespace())
    }
}

/// One node of the tree: a verbatim token leaf or a composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Item(Token),
    List(TokenList),
}

impl Node {
    pub fn list(kind: ListKind, children: Vec<Node>) -> Self {
        Node::List(TokenList::new(kind, children))
    }

    pub fn pos(&self) -> Pos {
        match self {
            Node::Item(token) => token.from,
            Node::List(list) => list.pos(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Node::Item(token) => token.to,
            Node::List(list) => list.end(),
        }
    }

    /// The node's span contains `pos`, boundaries included.
    pub fn contains(&self, pos: Pos) -> bool {
        self.pos() <= pos && pos <= self.end()
    }

    pub fn as_item(&self) -> Option<&Token> {
        match self {
            Node::Item(token) => Some(token),
            Node::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&TokenList> {
        match self {
            Node::Item(_) => None,
            Node::List(list) => Some(list),
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        self.as_list().map(|l| l.kind)
    }

    pub fn is_kind(&self, kind: ListKind) -> bool {
        self.list_kind() == Some(kind)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Item(token) if token.is_whitespace())
    }

    /// Leaf keyword test, case-insensitive.
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Node::Item(token) if token.is_keyword(word))
    }

    /// Leaf token kind, if this is a leaf.
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.as_item().map(|t| t.kind)
    }

    /// Anything that can name a value: identifiers, member identifiers,
    /// function literals, aliased expressions, and parenthesized groups.
    pub fn is_identifier_like(&self) -> bool {
        matches!(
            self.list_kind(),
            Some(
                ListKind::Identifier
                    | ListKind::MemberIdentifier
                    | ListKind::FunctionLiteral
                    | ListKind::Aliased
                    | ListKind::Parenthesis
            )
        )
    }

    /// The bare name carried by an `Identifier` node, quotes stripped for
    /// quoted identifiers.
    pub fn identifier_name(&self) -> Option<String> {
        let list = self.as_list()?;
        if list.kind != ListKind::Identifier {
            return None;
        }
        let token = list.children.first()?.as_item()?;
        Some(unquote(&token.value))
    }

    /// For a `MemberIdentifier`, the name left of the first period.
    pub fn member_parent_name(&self) -> Option<String> {
        let list = self.as_list()?;
        if list.kind != ListKind::MemberIdentifier {
            return None;
        }
        let token = list.children.first()?.as_item()?;
        Some(unquote(&token.value))
    }

    /// For a `MemberIdentifier`, the name right of the last period, if one
    /// has been typed (`None` for the trailing `a.` form, `*` included).
    pub fn member_child_name(&self) -> Option<String> {
        let list = self.as_list()?;
        if list.kind != ListKind::MemberIdentifier {
            return None;
        }
        let last = list.children.last()?.as_item()?;
        if last.kind == TokenKind::Period {
            return None;
        }
        Some(unquote(&last.value))
    }

    /// True for a `MemberIdentifier` ending in a period (`a.`).
    pub fn is_incomplete_member(&self) -> bool {
        match self.as_list() {
            Some(list) if list.kind == ListKind::MemberIdentifier => matches!(
                list.children.last().and_then(Node::as_item),
                Some(token) if token.kind == TokenKind::Period
            ),
            _ => false,
        }
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Item(token) => f.write_str(&token.value),
            Node::List(list) => list.fmt(f),
        }
    }
}

/// Strip the double-quote delimiters of a quoted identifier, if present.
pub fn unquote(value: &str) -> String {
    let v = value.strip_prefix('"').unwrap_or(value);
    let v = v.strip_suffix('"').unwrap_or(v);
    v.to_string()
}
