//! LCA/RMQ collaborators
//!
//! The suffix tree answers lowest-common-ancestor queries through the
//! standard LCA-to-RMQ reduction and treats both halves as black boxes:
//!
//! - `euler`: reduce a rooted tree to an Euler-tour depth array plus
//!   forward/backward mappers between node ids and tour slots
//! - `sparse`: sparse-table range-minimum-query structure, O(1) query
//!   after O(n log n) preprocessing
//!
//! Neither half knows anything about suffix trees.

pub mod euler;
pub mod sparse;

// Re-exports for convenience
pub use euler::{EulerTour, lca_to_rmq};
pub use sparse::RangeMinimumQuery;
