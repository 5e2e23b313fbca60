//! Compressed prefix tree for vocabulary counts.
//!
//! The tree stores every learned word once, with one occurrence counter per
//! category, and supports exact lookup, ordered iteration and prefix
//! iteration. Edges are labelled with whole substrings, so chains of
//! single-child nodes are merged and lookups cost one binary search per
//! edge followed.
//!
//! Lookup, validation, serialization and dropping use explicit stacks, so
//! deep trees decoded from untrusted input never exhaust the call stack.

pub mod iter;
pub mod node;
pub(crate) mod repr;
pub mod search;
pub mod tree;

pub use iter::Iter;
pub use node::{Edge, Node};
pub use search::{ChildMatch, MatchKind, longest_common_prefix, search_children};
pub use tree::Tree;
