//! Radix tree nodes and labelled edges.

use std::mem;

/// A node in the radix tree.
///
/// Each node is exclusively owned by the edge leading to it (or by the tree,
/// for the root). Dropping a node releases its subtree without recursion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// True iff the path from the root spells a stored word.
    pub(crate) is_leaf: bool,
    /// Per-category counts. Allocated on first insert, absent on internal nodes.
    pub(crate) counts: Option<Vec<u64>>,
    /// Outgoing edges, sorted by label.
    pub(crate) children: Vec<Edge>,
}

/// A labelled edge to a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Non-empty label.
    pub(crate) prefix: String,
    pub(crate) node: Node,
}

impl Node {
    /// Check if this node terminates a stored word.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Get the per-category counts, if any were recorded.
    pub fn counts(&self) -> Option<&[u64]> {
        self.counts.as_deref()
    }

    /// Get the outgoing edges in label order.
    pub fn children(&self) -> &[Edge] {
        &self.children
    }

    /// Create a node holding `suffix -> child` as its only edge.
    pub(crate) fn with_child(suffix: &str, child: Node) -> Self {
        Node {
            is_leaf: false,
            counts: None,
            children: vec![Edge::new(suffix.to_string(), child)],
        }
    }

    /// Record one occurrence of `category`, allocating the counts on demand.
    ///
    /// Returns true if the node was not a leaf before.
    pub(crate) fn record(&mut self, category: usize, categories: usize) -> bool {
        let counts = self.counts.get_or_insert_with(|| vec![0; categories]);
        counts[category] += 1;

        let is_new = !self.is_leaf;
        self.is_leaf = true;
        is_new
    }

    /// Count nodes in this subtree, including this one.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut size = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children.iter().map(|edge| &edge.node));
        }
        size
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut edge) = pending.pop() {
            pending.append(&mut edge.node.children);
        }
    }
}

impl Edge {
    /// Create a new edge.
    pub(crate) fn new(prefix: String, node: Node) -> Self {
        Edge { prefix, node }
    }

    /// Get the edge label.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the node this edge leads to.
    pub fn node(&self) -> &Node {
        &self.node
    }
}
