//! Suffix tree index
//!
//! Ties the pieces together: strategy-selected construction, the linear
//! preprocessing passes, and the query engine (`query`). The product is
//! built once and read-only afterwards; nothing in the query paths
//! mutates shared state, so a built index can be shared across threads
//! freely.
//!
//! ## Construction flow
//!
//! text -> (naive | ukkonen) builder -> raw tree -> preprocessing ->
//! queryable index. The preprocessing passes could be folded into the
//! builders, but keeping them separate keeps both sides readable; each
//! is a single linear walk.

pub mod query;

use crate::rmq::{RangeMinimumQuery, lca_to_rmq};
use crate::text::Text;
use crate::tree::{NodeArena, NodeId, naive, post_order, pre_order, ukkonen};

/// Construction strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// O(n²) reference construction
    Naive,
    /// Linear-time Ukkonen construction
    Ukkonen,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Strategy::Naive),
            "ukkonen" => Ok(Strategy::Ukkonen),
            other => Err(format!(
                "unknown strategy '{}' (expected 'naive' or 'ukkonen')",
                other
            )),
        }
    }
}

/// Indexed text supporting substring-occurrence queries, occurrence
/// counting, longest-repeated-substring discovery, and
/// longest-common-prefix queries between suffixes.
///
/// Space is O(n) for either strategy; construction is O(n) for
/// [`Strategy::Ukkonen`] and O(n²) for [`Strategy::Naive`].
pub struct SuffixTree {
    text: Text,
    arena: NodeArena,
    root: NodeId,
    /// Character depth from the root, indexed by node id.
    node_depths: Vec<usize>,
    /// Leaf count of each node's subtree, indexed by node id.
    subtree_leaves: Vec<usize>,
    /// Leaf node of each suffix, indexed by suffix start.
    leaves_by_suffix: Vec<NodeId>,
    /// Euler-tour mappers and the RMQ structure over its depth array.
    tour_forward: Vec<usize>,
    tour_backward: Vec<usize>,
    rmq: RangeMinimumQuery,
}

impl SuffixTree {
    /// Build the index over `raw` with the chosen strategy.
    ///
    /// The sentinel is appended internally; both strategies produce
    /// structurally equivalent trees and identical query answers.
    pub fn build(raw: &str, strategy: Strategy) -> Self {
        let text = Text::new(raw);
        let (arena, root) = match strategy {
            Strategy::Naive => naive::build(&text),
            Strategy::Ukkonen => ukkonen::build(&text),
        };

        let node_depths = compute_node_depths(&arena, root);
        let subtree_leaves = compute_subtree_leaves(&arena, root);
        let leaves_by_suffix = compute_leaves_by_suffix(&arena, root, text.len());
        let tour = lca_to_rmq(root, arena.len(), |id| {
            arena.node(id).children.values().copied().collect()
        });
        let rmq = RangeMinimumQuery::new(tour.depths);

        Self {
            text,
            arena,
            root,
            node_depths,
            subtree_leaves,
            leaves_by_suffix,
            tour_forward: tour.forward,
            tour_backward: tour.backward,
            rmq,
        }
    }

    /// Length of the indexed input in characters (sentinel excluded).
    pub fn text_len(&self) -> usize {
        self.text.raw_len()
    }

    /// Total node count of the tree.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

/// Character depth of every node: a node's depth is its parent's depth
/// plus its incoming edge length. Pre-order guarantees parents are
/// settled before their children.
fn compute_node_depths(arena: &NodeArena, root: NodeId) -> Vec<usize> {
    let mut depths = vec![0; arena.len()];
    for id in pre_order(arena, root) {
        if let Some(parent) = arena.node(id).parent {
            depths[id] = depths[parent] + arena.node(id).edge_len();
        }
    }
    depths
}

/// Leaf count of every subtree: leaves seed themselves with 1 and every
/// node folds its count into its parent once its own children are done.
fn compute_subtree_leaves(arena: &NodeArena, root: NodeId) -> Vec<usize> {
    let mut leaves = vec![0; arena.len()];
    for id in post_order(arena, root) {
        if arena.node(id).is_leaf() {
            leaves[id] = 1;
        }
        if let Some(parent) = arena.node(id).parent {
            leaves[parent] += leaves[id];
        }
    }
    leaves
}

/// Leaf lookup by suffix start index. The sentinel guarantees every
/// suffix has its own leaf, so every slot is overwritten.
fn compute_leaves_by_suffix(arena: &NodeArena, root: NodeId, text_len: usize) -> Vec<NodeId> {
    let mut leaves = vec![root; text_len];
    for id in pre_order(arena, root) {
        if let Some(suffix) = arena.node(id).suffix {
            leaves[suffix] = id;
        }
    }
    leaves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("naive".parse::<Strategy>(), Ok(Strategy::Naive));
        assert_eq!("ukkonen".parse::<Strategy>(), Ok(Strategy::Ukkonen));
        assert!("fast".parse::<Strategy>().is_err());
        assert!("Ukkonen".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_depths_and_leaf_counts() {
        for strategy in [Strategy::Naive, Strategy::Ukkonen] {
            let tree = SuffixTree::build("aa", strategy);
            // root depth 0, every leaf depth = suffix length with sentinel
            assert_eq!(tree.node_depths[tree.root], 0);
            for (suffix, &leaf) in tree.leaves_by_suffix.iter().enumerate() {
                assert_eq!(tree.node_depths[leaf], tree.text.len() - suffix);
                assert_eq!(tree.subtree_leaves[leaf], 1);
            }
            // the root's subtree holds every leaf, one per suffix
            assert_eq!(tree.subtree_leaves[tree.root], tree.text.len());
        }
    }

    #[test]
    fn test_degenerate_texts_build() {
        for strategy in [Strategy::Naive, Strategy::Ukkonen] {
            let empty = SuffixTree::build("", strategy);
            assert_eq!(empty.text_len(), 0);
            assert_eq!(empty.node_count(), 2);

            let single = SuffixTree::build("x", strategy);
            assert_eq!(single.text_len(), 1);
            assert_eq!(single.subtree_leaves[single.root], 2);
        }
    }

    #[test]
    fn test_arrays_sized_to_node_count() {
        let tree = SuffixTree::build("senselessness", Strategy::Ukkonen);
        assert_eq!(tree.node_depths.len(), tree.node_count());
        assert_eq!(tree.subtree_leaves.len(), tree.node_count());
        assert_eq!(tree.leaves_by_suffix.len(), tree.text.len());
        assert_eq!(tree.rmq.len(), 2 * tree.node_count() - 1);
    }
}
