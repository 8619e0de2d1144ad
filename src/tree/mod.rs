//! Suffix tree construction module
//!
//! The tree is a flat arena of nodes addressed by dense integer ids;
//! edges are intervals into the indexed text, never copied substrings.
//!
//! ## Architecture
//!
//! - `node`: node/edge model and the owning arena
//! - `naive`: O(n²) reference builder (correctness oracle)
//! - `ukkonen`: linear-time builder (the performance path)
//! - `traverse`: iterative pre/post-order walks
//!
//! Both builders produce structurally equivalent trees for the same
//! text, modulo node id assignment and child iteration order.

pub mod naive;
pub mod node;
pub mod traverse;
pub mod ukkonen;

// Re-exports for convenience
pub use node::{Node, NodeArena, NodeId};
pub use traverse::{PostOrder, PreOrder, post_order, pre_order};
