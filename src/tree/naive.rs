//! Naive suffix tree builder
//!
//! Reference O(n²) construction: every suffix is inserted by walking down
//! from the root, splitting an edge at the first mismatch. Serves as the
//! correctness oracle for the linear-time builder and as the build path
//! for small inputs.

use super::node::{NodeArena, NodeId};
use crate::text::{Text, match_len};

/// Build the tree by repeated suffix insertion.
///
/// Time O(n²), space O(n). The sentinel guarantees no suffix is silently
/// absorbed by an existing path, so every insertion ends by attaching a
/// fresh leaf.
pub fn build(text: &Text) -> (NodeArena, NodeId) {
    let mut arena = NodeArena::new();
    let root = arena.alloc(0, 0, None);
    let chars = text.as_chars();
    let n = text.len();

    for i in 0..n {
        let mut j = i;
        let mut cursor = root;
        while let Some(child) = arena.child(cursor, chars[j]) {
            let (child_left, child_right) = {
                let node = arena.node(child);
                (node.left, node.right)
            };
            let matched = match_len(chars, j, n, chars, child_left, child_right);
            j += matched;
            if matched == child_right - child_left {
                // edge exhausted, keep descending
                cursor = child;
                continue;
            }
            // mismatch mid-edge: split, then hang the new leaf off the split
            let split = arena.alloc(child_left, child_left + matched, None);
            arena.node_mut(child).left = child_left + matched;
            arena.attach(cursor, chars[child_left], split);
            arena.attach(split, chars[child_left + matched], child);
            cursor = split;
            break;
        }
        let leaf = arena.alloc(j, n, Some(i));
        arena.attach(cursor, chars[j], leaf);
    }

    (arena, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::traverse::pre_order;

    #[test]
    fn test_one_leaf_per_suffix() {
        let text = Text::new("banana");
        let (arena, root) = build(&text);
        let mut suffixes: Vec<usize> = pre_order(&arena, root)
            .filter_map(|id| arena.node(id).suffix)
            .collect();
        suffixes.sort_unstable();
        assert_eq!(suffixes, (0..text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_leaf_depth_spells_whole_suffix() {
        let text = Text::new("mississippi");
        let (arena, root) = build(&text);
        for id in pre_order(&arena, root) {
            let node = arena.node(id);
            if let Some(suffix) = node.suffix {
                let mut depth = 0;
                let mut cursor = id;
                loop {
                    depth += arena.node(cursor).edge_len();
                    match arena.node(cursor).parent {
                        Some(parent) => cursor = parent,
                        None => break,
                    }
                }
                assert_eq!(depth, text.len() - suffix);
            }
        }
    }

    #[test]
    fn test_internal_nodes_branch() {
        let text = Text::new("abcabxabcd");
        let (arena, root) = build(&text);
        for id in pre_order(&arena, root) {
            let node = arena.node(id);
            if !node.is_leaf() && id != root {
                assert!(node.children.len() >= 2);
            }
        }
    }

    #[test]
    fn test_empty_text_builds() {
        let text = Text::new("");
        let (arena, root) = build(&text);
        // root plus the single sentinel leaf
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.node(root).children.len(), 1);
    }
}
