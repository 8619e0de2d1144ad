//! Node and arena types for the suffix tree
//!
//! Nodes live in a flat arena (`Vec<Node>`) and refer to each other by
//! dense integer ids. Parent references are plain ids, never a second
//! owning pointer, so the tree stays a single ownership hierarchy while
//! still supporting O(1) upward walks.

use rustc_hash::FxHashMap;

/// Index of a node in the arena. Ids are dense, assigned sequentially
/// starting from 0.
pub type NodeId = usize;

/// A node of the suffix tree together with its incoming edge.
///
/// The edge arriving from the parent is stored as the half-open interval
/// `[left, right)` into the indexed text, never as a copied substring.
/// The root carries the empty interval `[0, 0)` and no parent.
#[derive(Debug, Clone)]
pub struct Node {
    /// Start of the incoming edge label (inclusive).
    pub left: usize,
    /// End of the incoming edge label (exclusive).
    pub right: usize,
    /// Suffix start index when this node is a leaf, `None` for internal
    /// nodes. A node is a leaf exactly when this is set.
    pub suffix: Option<usize>,
    /// Parent id; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Children keyed by the first character of the child's edge label.
    pub children: FxHashMap<char, NodeId>,
}

impl Node {
    /// Length of the incoming edge label in characters.
    #[inline]
    pub fn edge_len(&self) -> usize {
        self.right - self.left
    }

    /// True when this node represents a complete suffix.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.suffix.is_some()
    }
}

/// Flat arena owning every node of one tree.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a node with the next sequential id and return the id.
    pub fn alloc(&mut self, left: usize, right: usize, suffix: Option<usize>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            left,
            right,
            suffix,
            parent: None,
            children: FxHashMap::default(),
        });
        id
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Child of `id` whose edge label starts with `first`, if any.
    #[inline]
    pub fn child(&self, id: NodeId, first: char) -> Option<NodeId> {
        self.nodes[id].children.get(&first).copied()
    }

    /// Attach `child` under `parent`, keyed by `first`.
    pub fn attach(&mut self, parent: NodeId, first: char, child: NodeId) {
        self.nodes[parent].children.insert(first, child);
        self.nodes[child].parent = Some(parent);
    }
}
