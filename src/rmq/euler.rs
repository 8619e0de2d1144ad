//! LCA to RMQ reduction
//!
//! Flattens a rooted tree into an Euler-tour depth array: every node is
//! recorded on first entry and again after each child returns. The
//! lowest common ancestor of two nodes is then the shallowest tour slot
//! between any occurrence of each, which a range-minimum query answers
//! in O(1). The reduction is generic over a children-listing closure so
//! it knows nothing about the tree it is flattening.

/// Euler-tour reduction of a tree, ready for RMQ preprocessing.
#[derive(Debug)]
pub struct EulerTour {
    /// Depth (edge count from the root) of the node at each tour slot.
    /// This is the array the RMQ structure is built over.
    pub depths: Vec<usize>,
    /// Tour slot -> node id.
    pub backward: Vec<usize>,
    /// Node id -> first tour slot holding that node.
    pub forward: Vec<usize>,
}

impl EulerTour {
    fn record(&mut self, node: usize, depth: usize) {
        if self.forward[node] == usize::MAX {
            self.forward[node] = self.depths.len();
        }
        self.depths.push(depth);
        self.backward.push(node);
    }
}

/// Reduce the tree rooted at `root` to an Euler-tour array.
///
/// `children` lists the child ids of a node; `node_count` bounds the id
/// space (ids must be dense in `0..node_count`). A tree of n nodes
/// produces a tour of `2n - 1` slots, so the whole reduction is O(n).
/// Iterative on an explicit stack, like every other walk in this crate.
pub fn lca_to_rmq<C>(root: usize, node_count: usize, children: C) -> EulerTour
where
    C: Fn(usize) -> Vec<usize>,
{
    let mut tour = EulerTour {
        depths: Vec::with_capacity(2 * node_count),
        backward: Vec::with_capacity(2 * node_count),
        forward: vec![usize::MAX; node_count],
    };

    // frame: (node, depth, children, next child index)
    let mut stack: Vec<(usize, usize, Vec<usize>, usize)> = Vec::new();
    tour.record(root, 0);
    stack.push((root, 0, children(root), 0));

    while let Some(frame) = stack.last_mut() {
        if frame.3 < frame.2.len() {
            let child = frame.2[frame.3];
            let child_depth = frame.1 + 1;
            frame.3 += 1;
            tour.record(child, child_depth);
            stack.push((child, child_depth, children(child), 0));
        } else {
            stack.pop();
            if let Some(parent) = stack.last() {
                tour.record(parent.0, parent.1);
            }
        }
    }

    tour
}
