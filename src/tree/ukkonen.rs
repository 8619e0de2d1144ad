//! Linear-time suffix tree builder (Ukkonen's algorithm)
//!
//! A single left-to-right scan of the text maintains an active point
//! `(cursor, left, right)` describing the implicit extension position.
//! Each scanned character runs one `update` round (create leaves and
//! split edges until the extension becomes implicit, chaining suffix
//! links between the split borders) followed by `canonise` (the
//! skip-count descent that keeps the active point anchored at the
//! shallowest node-relative representation).
//!
//! Two deviations from the textbook presentation, both inherited from
//! the structure's semantics:
//!
//! - Leaf right boundaries are finalized eagerly at `text.len()` instead
//!   of tracking a growing global end, so the builder is not online; the
//!   tree cannot be extended after construction without a rebuild.
//! - The "ground" node below the root is an explicit sentinel id, not an
//!   allocated node. Its child lookup resolves to the root for every
//!   character and stepping across it consumes exactly one character,
//!   which bootstraps suffix-link creation without special-casing the
//!   first suffix.

use super::node::{NodeArena, NodeId};
use crate::text::Text;

/// Sentinel id for the synthetic node below the root. Never allocated in
/// the arena; every lookup through it lands on the root.
const GROUND: NodeId = usize::MAX;

struct UkkonenBuilder<'a> {
    text: &'a Text,
    arena: NodeArena,
    root: NodeId,
    /// Suffix links as a dense table indexed by node id. Entries default
    /// to `GROUND`, which also covers the root's link.
    slinks: Vec<NodeId>,
}

/// Build the tree in O(n) time and space.
pub fn build(text: &Text) -> (NodeArena, NodeId) {
    let mut arena = NodeArena::new();
    let root = arena.alloc(0, 0, None);
    let mut builder = UkkonenBuilder {
        text,
        arena,
        root,
        slinks: Vec::new(),
    };

    let mut cursor = root;
    let mut left = 0;
    let mut right = 0;
    let mut next_suffix = 0;
    for _ in 0..text.len() {
        (cursor, left, right, next_suffix) = builder.update(cursor, left, right, next_suffix);
        (cursor, left, right) = builder.canonise(cursor, left, right + 1);
    }

    (builder.arena, root)
}

impl UkkonenBuilder<'_> {
    /// Child lookup during construction. The ground node resolves to the
    /// root for every character.
    #[inline]
    fn step(&self, node: NodeId, first: char) -> NodeId {
        if node == GROUND {
            self.root
        } else {
            self.arena.node(node).children[&first]
        }
    }

    #[inline]
    fn slink(&self, id: NodeId) -> NodeId {
        self.slinks.get(id).copied().unwrap_or(GROUND)
    }

    fn set_slink(&mut self, from: NodeId, to: NodeId) {
        if self.slinks.len() <= from {
            self.slinks.resize(from + 1, GROUND);
        }
        self.slinks[from] = to;
    }

    /// Extend the tree at the current scan position: while the active
    /// point is not terminal, attach a new leaf at the border node, chain
    /// the previous border to it via a suffix link, then hop to the next
    /// shallower suffix through the cursor's suffix link. Each hop
    /// strictly shrinks the remaining active length, which is what makes
    /// the whole scan amortized linear.
    fn update(
        &mut self,
        cursor: NodeId,
        left: usize,
        right: usize,
        next_suffix: usize,
    ) -> (NodeId, usize, usize, usize) {
        let mut cursor = cursor;
        let mut left = left;
        let mut next_suffix = next_suffix;
        let mut previous_border: Option<NodeId> = None;

        let (mut terminal, mut border) = self.test_and_split(cursor, left, right);
        while !terminal {
            let leaf = self
                .arena
                .alloc(right, self.text.len(), Some(next_suffix));
            next_suffix += 1;
            self.arena.attach(border, self.text.at(right), leaf);
            if let Some(previous) = previous_border {
                self.set_slink(previous, border);
            }
            previous_border = Some(border);
            (cursor, left, _) = self.canonise(self.slink(cursor), left, right);
            (terminal, border) = self.test_and_split(cursor, left, right);
        }
        if let Some(previous) = previous_border {
            self.set_slink(previous, border);
        }

        (cursor, left, right, next_suffix)
    }

    /// Decide whether the active point `(cursor, left, right)` is
    /// terminal (the next character is already present, so the extension
    /// stays implicit) and return the node an insertion would hang off,
    /// splitting the active edge when the point sits mid-edge.
    fn test_and_split(&mut self, cursor: NodeId, left: usize, right: usize) -> (bool, NodeId) {
        if right == left {
            if cursor == GROUND {
                return (true, cursor);
            }
            let present = self
                .arena
                .node(cursor)
                .children
                .contains_key(&self.text.at(right));
            return (present, cursor);
        }

        let child = self.step(cursor, self.text.at(left));
        let child_left = self.arena.node(child).left;
        let span = right - left;
        if self.text.at(child_left + span) == self.text.at(right) {
            return (true, cursor);
        }

        let split = self.arena.alloc(child_left, child_left + span, None);
        self.arena.node_mut(child).left = child_left + span;
        self.arena.attach(cursor, self.text.at(child_left), split);
        self.arena.attach(split, self.text.at(child_left + span), child);
        (false, split)
    }

    /// Skip-count descent: walk the active point down through every fully
    /// covered edge so it refers to the shallowest canonical
    /// representation.
    fn canonise(&self, cursor: NodeId, left: usize, right: usize) -> (NodeId, usize, usize) {
        let mut cursor = cursor;
        let mut left = left;
        if right == left {
            return (cursor, left, right);
        }
        if cursor == GROUND {
            // stepping from ground to root consumes one character
            cursor = self.root;
            left += 1;
            if right == left {
                return (cursor, left, right);
            }
        }
        let mut child = self.step(cursor, self.text.at(left));
        while self.arena.node(child).edge_len() <= right - left {
            left += self.arena.node(child).edge_len();
            cursor = child;
            if left < right {
                child = self.step(cursor, self.text.at(left));
            } else {
                break;
            }
        }
        (cursor, left, right)
    }
}
