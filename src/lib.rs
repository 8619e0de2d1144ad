//! # STI - Suffix-Tree Text Index
//!
//! STI indexes a single fixed text into a suffix tree and answers
//! substring queries in time proportional to the pattern, not the text:
//! occurrence listing, occurrence counting, longest-repeated-substring
//! discovery, and O(1) longest-common-prefix between arbitrary suffixes.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Node arena and the two builders (naive and Ukkonen)
//! - [`index`] - Preprocessing passes and the query engine
//! - [`rmq`] - LCA-to-RMQ reduction and the range-minimum structure
//! - [`text`] - Sentinel-terminated text buffer
//! - [`error`] - Query error taxonomy
//! - [`output`] - CLI result formatting
//!
//! ## Quick Start
//!
//! ```
//! use sti::index::{Strategy, SuffixTree};
//!
//! let tree = SuffixTree::build("senselessness", Strategy::Ukkonen);
//!
//! let mut hits = tree.occurrences("ss").unwrap();
//! hits.sort_unstable();
//! assert_eq!(hits, vec![7, 11]);
//! assert_eq!(tree.occurrences_count("e").unwrap(), 4);
//! assert_eq!(tree.longest_common_prefix(0, 3).unwrap(), 2);
//! ```
//!
//! ## Construction
//!
//! `Strategy::Ukkonen` builds in linear time via suffix links and
//! skip-count canonization; `Strategy::Naive` is the O(n²) oracle used
//! for cross-checking. Both yield structurally equivalent trees and
//! identical query answers. The built index is immutable and safe to
//! share across threads.

pub mod error;
pub mod index;
pub mod output;
pub mod rmq;
pub mod text;
pub mod tree;
