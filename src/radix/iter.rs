//! Ordered traversal of stored words.

use crate::radix::node::Node;

/// Depth-first iterator over the words below a node.
///
/// Yields `(word, counts)` in lexicographic order: a node is visited before
/// its children, and children in label order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<(String, &'a Node)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(path: String, start: &'a Node) -> Self {
        Iter {
            stack: vec![(path, start)],
        }
    }

    pub(crate) fn empty() -> Self {
        Iter { stack: Vec::new() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (String, &'a [u64]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.stack.pop() {
            for edge in node.children.iter().rev() {
                self.stack.push((format!("{path}{}", edge.prefix), &edge.node));
            }

            if node.is_leaf
                && let Some(counts) = node.counts.as_deref()
            {
                return Some((path, counts));
            }
        }

        None
    }
}
