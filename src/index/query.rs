//! Query engine
//!
//! All queries run against the preprocessed index and never mutate it.
//! Invalid arguments are rejected up front (see `crate::error`); a
//! pattern that simply does not occur is a normal empty result.

use super::SuffixTree;
use crate::error::{QueryError, QueryResult};
use crate::text::match_len;
use crate::tree::{NodeId, pre_order};
use std::fmt;

impl SuffixTree {
    /// Find the node where the occurrence of `pattern` ends.
    ///
    /// Descends from the root matching pattern characters against edge
    /// labels. When the pattern ends inside an edge the node below that
    /// edge is returned. `Ok(None)` means the pattern does not occur.
    ///
    /// Time O(p) for pattern length p.
    pub fn search(&self, pattern: &str) -> QueryResult<Option<NodeId>> {
        if pattern.is_empty() {
            return Err(QueryError::EmptyPattern);
        }
        let pattern: Vec<char> = pattern.chars().collect();
        let chars = self.text.as_chars();
        let mut j = 0;
        let mut cursor = self.root;
        while let Some(child) = self.arena.child(cursor, pattern[j]) {
            let node = self.arena.node(child);
            let matched = match_len(&pattern, j, pattern.len(), chars, node.left, node.right);
            j += matched;
            cursor = child;
            if matched == node.edge_len() && j < pattern.len() {
                continue;
            }
            break;
        }
        Ok((j == pattern.len()).then_some(cursor))
    }

    /// Start indices of every occurrence of `pattern` in the text.
    ///
    /// Time O(p + q) for q occurrences: one descent plus a walk of the
    /// matched node's subtree collecting leaf suffix indices.
    pub fn occurrences(&self, pattern: &str) -> QueryResult<Vec<usize>> {
        match self.search(pattern)? {
            Some(node) => Ok(self.leaf_suffixes(node)),
            None => Ok(Vec::new()),
        }
    }

    /// Number of occurrences of `pattern`, in O(p) without enumeration:
    /// the matched node's precomputed subtree leaf count is the answer.
    pub fn occurrences_count(&self, pattern: &str) -> QueryResult<usize> {
        match self.search(pattern)? {
            Some(node) => Ok(self.subtree_leaves[node]),
            None => Ok(0),
        }
    }

    /// Start indices of the longest substring occurring at least
    /// `repetitions` times.
    ///
    /// Scans every node for the deepest one whose subtree holds enough
    /// leaves; ties resolve to the first such node in pre-order. Returns
    /// an empty list when only the root qualifies, meaning no substring
    /// of positive length repeats that often.
    pub fn longest_repeated_substring(&self, repetitions: usize) -> QueryResult<Vec<usize>> {
        if repetitions < 2 {
            return Err(QueryError::RepetitionsTooSmall(repetitions));
        }
        let mut best = self.root;
        let mut best_depth = self.node_depths[self.root];
        for id in pre_order(&self.arena, self.root) {
            if self.subtree_leaves[id] >= repetitions && self.node_depths[id] > best_depth {
                best = id;
                best_depth = self.node_depths[id];
            }
        }
        if best_depth == 0 {
            Ok(Vec::new())
        } else {
            Ok(self.leaf_suffixes(best))
        }
    }

    /// Length of the longest common prefix of the suffixes starting at
    /// `i` and `j`. Symmetric in its arguments; O(1) after
    /// preprocessing.
    ///
    /// The answer is the character depth of the lowest common ancestor
    /// of the two suffix leaves, found by a range-minimum query between
    /// their Euler-tour slots. The sentinel never counts towards the
    /// reported length.
    pub fn longest_common_prefix(&self, i: usize, j: usize) -> QueryResult<usize> {
        let len = self.text.raw_len();
        if i >= len || j >= len {
            let index = if i >= len { i } else { j };
            return Err(QueryError::SuffixOutOfRange { index, len });
        }
        if i == j {
            return Ok(len - i);
        }
        let slot_i = self.tour_forward[self.leaves_by_suffix[i]];
        let slot_j = self.tour_forward[self.leaves_by_suffix[j]];
        let ancestor = self.tour_backward[self.rmq.rmq(slot_i, slot_j)];
        Ok(self.node_depths[ancestor])
    }

    /// Suffix indices of every leaf under `from`, in pre-order.
    fn leaf_suffixes(&self, from: NodeId) -> Vec<usize> {
        pre_order(&self.arena, from)
            .filter_map(|id| self.arena.node(id).suffix)
            .collect()
    }
}

/// Human-readable tree dump: every node in pre-order with its edge label
/// (sentinel shown as `$`) and, for leaves, the suffix index in angle
/// brackets, indented by the parent's character depth. Diagnostics only;
/// line order within siblings is unspecified.
impl fmt::Display for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SuffixTree [")?;
        for id in pre_order(&self.arena, self.root) {
            let node = self.arena.node(id);
            let label = self.text.window(node.left, node.right);
            let tag = match node.suffix {
                Some(suffix) => format!("<{}>", suffix),
                None => String::new(),
            };
            let indent = node.parent.map_or(0, |parent| self.node_depths[parent]);
            writeln!(f, "{:indent$}├{} - {}", "", label, tag)?;
        }
        write!(f, "]")
    }
}
