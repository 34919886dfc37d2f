// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Node matching.
//!
//! The walker asks one question of preceding nodes: "is there a leaf
//! keyword here from this set?". Multi-word expectations (`GROUP BY`,
//! `ORDER BY`, `DELETE FROM`) match a run of adjacent keyword leaves, which
//! keeps multi-word keywords out of the tokenizer and the node inventory.

use crate::node::Node;

/// Matches leaf keywords against an expected set.
#[derive(Debug, Clone)]
pub struct NodeMatcher {
    expected: Vec<&'static str>,
}

impl NodeMatcher {
    /// Matcher for any of `words`; entries may contain a single space to
    /// express a two-word keyword.
    pub fn keywords(words: &[&'static str]) -> Self {
        Self {
            expected: words.to_vec(),
        }
    }

    /// True when the expectation matches at `index` of `nodes`.
    ///
    /// `nodes` is a sibling sequence, typically with whitespace already
    /// filtered out so adjacency means "next meaningful node".
    pub fn matches_at(&self, nodes: &[&Node], index: usize) -> bool {
        self.expected.iter().any(|expectation| {
            expectation
                .split(' ')
                .enumerate()
                .all(|(offset, word)| match nodes.get(index + offset) {
                    Some(node) => node.is_keyword(word),
                    None => false,
                })
        })
    }

    /// True when the expectation matches anywhere in `nodes`.
    pub fn matches_any(&self, nodes: &[&Node]) -> bool {
        (0..nodes.len()).any(|i| self.matches_at(nodes, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squill_token::tokenize;

    fn nodes(input: &str) -> Vec<Node> {
        tokenize(input)
            .into_iter()
            .map(Node::Item)
            .filter(|n| !n.is_whitespace())
            .collect()
    }

    #[test]
    fn single_word_match() {
        let owned = nodes("select x from t");
        let refs: Vec<&Node> = owned.iter().collect();
        assert!(NodeMatcher::keywords(&["SELECT"]).matches_any(&refs));
        assert!(NodeMatcher::keywords(&["FROM"]).matches_any(&refs));
        assert!(!NodeMatcher::keywords(&["WHERE"]).matches_any(&refs));
    }

    #[test]
    fn two_word_match_requires_adjacency() {
        let owned = nodes("select x order by y");
        let refs: Vec<&Node> = owned.iter().collect();
        assert!(NodeMatcher::keywords(&["ORDER BY"]).matches_any(&refs));
        assert!(!NodeMatcher::keywords(&["GROUP BY"]).matches_any(&refs));

        let split = nodes("order x by");
        let split_refs: Vec<&Node> = split.iter().collect();
        assert!(!NodeMatcher::keywords(&["ORDER BY"]).matches_any(&split_refs));
    }

    #[test]
    fn identifiers_do_not_match_keywords() {
        // `city` is an identifier even though it appears in the set
        let owned = nodes("city");
        let refs: Vec<&Node> = owned.iter().collect();
        assert!(!NodeMatcher::keywords(&["CITY"]).matches_any(&refs));
    }
}
