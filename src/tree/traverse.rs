//! Tree traversal utilities
//!
//! Iterative pre-order and post-order walks over the node arena. Both use
//! explicit stacks instead of recursion: a degenerate text can produce a
//! chain whose depth is proportional to the text length, which would
//! overflow the call stack in a recursive walk.
//!
//! Child order follows the children map's iteration order, not character
//! order. Every consumer is an order-insensitive aggregation except the
//! diagnostic dump, whose line order is therefore unspecified.

use super::node::{NodeArena, NodeId};

/// Lazy pre-order iterator (node before its children).
pub struct PreOrder<'a> {
    arena: &'a NodeArena,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.arena.node(id).children.values());
        Some(id)
    }
}

/// Walk the subtree under `root` in pre-order.
pub fn pre_order(arena: &NodeArena, root: NodeId) -> PreOrder<'_> {
    PreOrder {
        arena,
        stack: vec![root],
    }
}

/// Post-order iterator (children before the node).
///
/// The order is materialized up front with the two-stack scheme: a
/// pre-order walk that pushes children unreversed, emitted backwards,
/// yields every node after all of its children.
pub struct PostOrder {
    order: std::vec::IntoIter<NodeId>,
}

impl Iterator for PostOrder {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.order.next()
    }
}

/// Walk the subtree under `root` in post-order.
pub fn post_order(arena: &NodeArena, root: NodeId) -> PostOrder {
    let mut stack = vec![root];
    let mut order = Vec::with_capacity(arena.len());
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(arena.node(id).children.values());
    }
    order.reverse();
    PostOrder {
        order: order.into_iter(),
    }
}
