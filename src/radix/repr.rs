//! Flat serialized form of a [`Tree`].
//!
//! Nodes are written as one pre-order list. Each entry carries its edge
//! label and the number of children that follow it, in place of a nested
//! structure, so encoding and decoding use an explicit stack whatever the
//! depth of the tree. A decoded tree is rebuilt bottom-up and then checked
//! with [`Tree::check_invariants`] before it is handed out.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::BayesianError;
use crate::radix::node::{Edge, Node};
use crate::radix::tree::Tree;

/// One node of the pre-order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FlatNode {
    pub(crate) prefix: String,
    pub(crate) is_leaf: bool,
    pub(crate) counts: Option<Vec<u64>>,
    pub(crate) children: u64,
}

/// Owned wire form of a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TreeRepr {
    pub(crate) categories: usize,
    pub(crate) totals: Vec<u64>,
    pub(crate) unique_words: u64,
    pub(crate) nodes: Vec<FlatNode>,
}

#[derive(Serialize)]
struct FlatNodeRef<'a> {
    prefix: &'a str,
    is_leaf: bool,
    counts: Option<&'a [u64]>,
    children: u64,
}

#[derive(Serialize)]
struct TreeReprRef<'a> {
    categories: usize,
    totals: &'a [u64],
    unique_words: u64,
    nodes: Vec<FlatNodeRef<'a>>,
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut nodes = Vec::new();
        let mut pending: Vec<(&str, &Node)> = vec![("", self.root())];

        while let Some((prefix, node)) = pending.pop() {
            nodes.push(FlatNodeRef {
                prefix,
                is_leaf: node.is_leaf,
                counts: node.counts.as_deref(),
                children: node.children.len() as u64,
            });
            pending.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|edge| (edge.prefix.as_str(), &edge.node)),
            );
        }

        TreeReprRef {
            categories: self.categories(),
            totals: self.totals(),
            unique_words: self.unique_words(),
            nodes,
        }
        .serialize(serializer)
    }
}

impl TryFrom<TreeRepr> for Tree {
    type Error = BayesianError;

    fn try_from(repr: TreeRepr) -> Result<Self, Self::Error> {
        // Walking the list backwards completes every subtree before its
        // parent, with the first child on top of the stack.
        let mut built: Vec<Edge> = Vec::new();
        for flat in repr.nodes.into_iter().rev() {
            let count = usize::try_from(flat.children)
                .ok()
                .filter(|&count| count <= built.len())
                .ok_or_else(|| {
                    BayesianError::corrupt_model(format!(
                        "node {:?} claims {} children, {} available",
                        flat.prefix,
                        flat.children,
                        built.len()
                    ))
                })?;

            let mut children = built.split_off(built.len() - count);
            children.reverse();
            let node = Node {
                is_leaf: flat.is_leaf,
                counts: flat.counts,
                children,
            };
            built.push(Edge::new(flat.prefix, node));
        }

        let root = built.pop().ok_or_else(|| BayesianError::corrupt_model("no root node"))?;
        if !built.is_empty() {
            return Err(BayesianError::corrupt_model(format!(
                "{} nodes are not reachable from the root",
                built.len()
            )));
        }
        if !root.prefix.is_empty() {
            return Err(BayesianError::corrupt_model(format!(
                "root carries the label {:?}",
                root.prefix
            )));
        }

        let tree = Tree::from_parts(repr.categories, repr.totals, repr.unique_words, root.node);
        tree.check_invariants()?;
        Ok(tree)
    }
}

/// A root followed by `depth` nodes, each the only child of the previous.
///
/// With `leaf` set every node below the root stores a word, which is a valid
/// tree; otherwise the chain consists of one-child internal nodes.
#[cfg(test)]
pub(crate) fn chain(depth: usize, leaf: bool) -> TreeRepr {
    let mut nodes = vec![FlatNode {
        prefix: String::new(),
        is_leaf: false,
        counts: None,
        children: 1,
    }];
    for level in 1..=depth {
        nodes.push(FlatNode {
            prefix: "a".to_string(),
            is_leaf: leaf,
            counts: leaf.then(|| vec![1]),
            children: u64::from(level < depth),
        });
    }

    TreeRepr {
        categories: 1,
        totals: vec![if leaf { depth as u64 } else { 0 }],
        unique_words: if leaf { depth as u64 } else { 0 },
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree {
        let mut tree = Tree::new(2).unwrap();
        for (word, category) in [("medicine", 0), ("medical", 1), ("app", 0), ("apple", 1)] {
            tree.insert(word, category).unwrap();
        }
        tree
    }

    #[test]
    fn test_preorder_layout() {
        let tree = sample();
        let bytes = bincode::serialize(&tree).unwrap();
        let repr: TreeRepr = bincode::deserialize(&bytes).unwrap();

        let layout: Vec<(&str, u64)> = repr
            .nodes
            .iter()
            .map(|node| (node.prefix.as_str(), node.children))
            .collect();
        assert_eq!(
            layout,
            vec![
                ("", 2),
                ("app", 1),
                ("le", 0),
                ("medic", 2),
                ("al", 0),
                ("ine", 0),
            ]
        );
        assert_eq!(repr.unique_words, 4);
        assert_eq!(repr.totals, vec![2, 2]);
    }

    #[test]
    fn test_round_trip() {
        let tree = sample();
        let decoded: Tree = bincode::deserialize(&bincode::serialize(&tree).unwrap()).unwrap();
        assert_eq!(decoded, tree);

        let json = serde_json::to_string(&tree).unwrap();
        let decoded: Tree = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_deep_valid_chain_decodes() {
        let depth = 200_000;
        let bytes = bincode::serialize(&chain(depth, true)).unwrap();

        let tree: Tree = bincode::deserialize(&bytes).unwrap();
        assert_eq!(tree.unique_words(), depth as u64);
        assert_eq!(tree.node_count(), depth + 1);
        assert_eq!(tree.find(&"a".repeat(depth)), Some(&[1][..]));
        assert_eq!(bincode::serialize(&tree).unwrap(), bytes);
    }

    #[test]
    fn test_deep_internal_chain_is_rejected() {
        let result = Tree::try_from(chain(200_000, false));
        assert!(matches!(result, Err(BayesianError::CorruptModel(_))));
    }

    #[test]
    fn test_malformed_lists_are_rejected() {
        let mut too_many = chain(2, true);
        too_many.nodes[2].children = 5;
        assert!(matches!(
            Tree::try_from(too_many),
            Err(BayesianError::CorruptModel(_))
        ));

        let mut orphan = chain(2, true);
        orphan.nodes[0].children = 0;
        assert!(matches!(
            Tree::try_from(orphan),
            Err(BayesianError::CorruptModel(_))
        ));

        let mut labelled_root = chain(1, true);
        labelled_root.nodes[0].prefix = "x".to_string();
        assert!(matches!(
            Tree::try_from(labelled_root),
            Err(BayesianError::CorruptModel(_))
        ));

        let mut empty = chain(1, true);
        empty.nodes.clear();
        assert!(matches!(
            Tree::try_from(empty),
            Err(BayesianError::CorruptModel(_))
        ));
    }

    #[test]
    fn test_overflowing_counts_are_rejected() {
        let repr = TreeRepr {
            categories: 1,
            totals: vec![0],
            unique_words: 2,
            nodes: vec![
                FlatNode {
                    prefix: String::new(),
                    is_leaf: false,
                    counts: None,
                    children: 2,
                },
                FlatNode {
                    prefix: "a".to_string(),
                    is_leaf: true,
                    counts: Some(vec![u64::MAX]),
                    children: 0,
                },
                FlatNode {
                    prefix: "b".to_string(),
                    is_leaf: true,
                    counts: Some(vec![1]),
                    children: 0,
                },
            ],
        };
        assert!(matches!(
            Tree::try_from(repr),
            Err(BayesianError::CorruptModel(_))
        ));
    }
}
