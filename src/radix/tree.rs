//! Radix tree holding per-category word counts.

use std::mem;

use serde::Deserialize;
use tracing::trace;

use crate::error::{BayesianError, Result};
use crate::radix::iter::Iter;
use crate::radix::node::{Edge, Node};
use crate::radix::repr::TreeRepr;
use crate::radix::search::{MatchKind, search_children};

/// A compressed prefix tree mapping words to per-category occurrence counts.
///
/// Edges carry non-empty labels and siblings never share a leading
/// character. Each word is stored on the node reached by concatenating the
/// labels from the root, so the empty string lives on the root itself.
///
/// # Examples
///
/// ```
/// use bayesian::radix::Tree;
///
/// let mut tree = Tree::new(2).unwrap();
/// tree.insert("apple", 1).unwrap();
/// tree.insert("app", 0).unwrap();
///
/// assert_eq!(tree.find("apple"), Some(&[0, 1][..]));
/// assert_eq!(tree.find("ap"), None);
/// assert_eq!(tree.unique_words(), 2);
/// ```
///
/// Serialized trees use a flat pre-order node list; deserializing one
/// re-checks every invariant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TreeRepr")]
pub struct Tree {
    categories: usize,
    totals: Vec<u64>,
    unique_words: u64,
    root: Node,
}

impl Tree {
    /// Create an empty tree tracking `categories` categories.
    pub fn new(categories: usize) -> Result<Self> {
        if categories == 0 {
            return Err(BayesianError::InvalidCategoryCount(categories));
        }

        Ok(Tree {
            categories,
            totals: vec![0; categories],
            unique_words: 0,
            root: Node::default(),
        })
    }

    pub(crate) fn from_parts(
        categories: usize,
        totals: Vec<u64>,
        unique_words: u64,
        root: Node,
    ) -> Self {
        Tree {
            categories,
            totals,
            unique_words,
            root,
        }
    }

    /// Record one occurrence of `needle` under `category`.
    pub fn insert(&mut self, needle: &str, category: usize) -> Result<()> {
        if category >= self.categories {
            return Err(BayesianError::OutOfBoundsCategory {
                category,
                categories: self.categories,
            });
        }

        let categories = self.categories;
        let node = find_or_create(&mut self.root, needle)?;
        if node.record(category, categories) {
            self.unique_words += 1;
        }
        self.totals[category] += 1;

        Ok(())
    }

    /// Look up the per-category counts of an exact word.
    pub fn find(&self, needle: &str) -> Option<&[u64]> {
        self.find_node(needle).and_then(Node::counts)
    }

    /// Check if `needle` was ever inserted.
    pub fn contains(&self, needle: &str) -> bool {
        self.find_node(needle).is_some()
    }

    /// Get the number of learning events per category.
    pub fn totals(&self) -> &[u64] {
        &self.totals
    }

    /// Get the number of categories this tree tracks.
    pub fn categories(&self) -> usize {
        self.categories
    }

    /// Get the number of distinct words stored.
    pub fn unique_words(&self) -> u64 {
        self.unique_words
    }

    /// Check if no word has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.unique_words == 0
    }

    /// Get the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Get the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Iterate over every stored word and its counts in lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(String::new(), &self.root)
    }

    /// Iterate over the stored words starting with `prefix`.
    pub fn iter_prefix(&self, prefix: &str) -> Iter<'_> {
        let mut current = &self.root;
        let mut remainder = prefix;
        let mut path = String::with_capacity(prefix.len());

        while !remainder.is_empty() {
            let found = search_children(&current.children, remainder);
            let edge = match found.kind {
                MatchKind::Exact | MatchKind::Substring | MatchKind::Super => {
                    match current.children.get(found.index) {
                        Some(edge) => edge,
                        None => return Iter::empty(),
                    }
                }
                MatchKind::SharedPrefix | MatchKind::NoMatch => return Iter::empty(),
            };

            path.push_str(&edge.prefix);
            remainder = &remainder[found.common.len()..];
            current = &edge.node;
        }

        Iter::new(path, current)
    }

    /// Verify the structural and counting invariants of the tree.
    ///
    /// Used when loading persisted models; a tree built through
    /// [`Tree::insert`] always passes.
    pub fn check_invariants(&self) -> Result<()> {
        if self.categories == 0 {
            return Err(BayesianError::InvalidCategoryCount(0));
        }
        if self.totals.len() != self.categories {
            return Err(BayesianError::corrupt_model(format!(
                "expected {} category totals, found {}",
                self.categories,
                self.totals.len()
            )));
        }

        let mut leaves = 0u64;
        let mut sums = vec![0u64; self.categories];
        let mut pending: Vec<(&str, &Node, bool)> = vec![("", &self.root, true)];

        while let Some((label, node, is_root)) = pending.pop() {
            match (&node.counts, node.is_leaf) {
                (Some(counts), true) => {
                    if counts.len() != self.categories {
                        return Err(BayesianError::corrupt_model(format!(
                            "word ending in {label:?} has {} counts, expected {}",
                            counts.len(),
                            self.categories
                        )));
                    }
                    if counts.iter().all(|&count| count == 0) {
                        return Err(BayesianError::corrupt_model(format!(
                            "word ending in {label:?} has no recorded occurrences"
                        )));
                    }
                    for (sum, &count) in sums.iter_mut().zip(counts) {
                        *sum = sum.checked_add(count).ok_or_else(|| {
                            BayesianError::corrupt_model("category counts overflow u64")
                        })?;
                    }
                    leaves += 1;
                }
                (None, false) => {
                    if !is_root && node.children.len() < 2 {
                        return Err(BayesianError::corrupt_model(format!(
                            "internal node {label:?} has {} children",
                            node.children.len()
                        )));
                    }
                }
                (Some(_), false) => {
                    return Err(BayesianError::corrupt_model(format!(
                        "internal node {label:?} carries counts"
                    )));
                }
                (None, true) => {
                    return Err(BayesianError::corrupt_model(format!(
                        "word ending in {label:?} has no counts"
                    )));
                }
            }

            let mut previous: Option<&str> = None;
            for edge in &node.children {
                if edge.prefix.is_empty() {
                    return Err(BayesianError::corrupt_model(format!(
                        "empty edge label below {label:?}"
                    )));
                }
                if let Some(previous) = previous
                    && (previous >= edge.prefix.as_str()
                        || previous.chars().next() == edge.prefix.chars().next())
                {
                    return Err(BayesianError::corrupt_model(format!(
                        "edges {previous:?} and {:?} below {label:?} overlap or are unsorted",
                        edge.prefix
                    )));
                }
                previous = Some(edge.prefix.as_str());
                pending.push((edge.prefix.as_str(), &edge.node, false));
            }
        }

        if leaves != self.unique_words {
            return Err(BayesianError::corrupt_model(format!(
                "unique word count {} does not match {leaves} leaves",
                self.unique_words
            )));
        }
        if sums != self.totals {
            return Err(BayesianError::corrupt_model(format!(
                "category totals {:?} do not match leaf sums {sums:?}",
                self.totals
            )));
        }

        Ok(())
    }

    fn find_node(&self, needle: &str) -> Option<&Node> {
        let mut current = &self.root;
        let mut remainder = needle;

        while !remainder.is_empty() {
            let found = search_children(&current.children, remainder);
            match found.kind {
                MatchKind::Exact | MatchKind::Substring => {
                    current = &current.children.get(found.index)?.node;
                    remainder = &remainder[found.common.len()..];
                }
                MatchKind::SharedPrefix | MatchKind::Super | MatchKind::NoMatch => return None,
            }
        }

        current.is_leaf.then_some(current)
    }
}

/// Walk from `root` to the node spelling `needle`, creating it if absent.
///
/// Splits or extends edges as needed; the returned node is not yet flagged
/// as a leaf.
fn find_or_create<'a>(root: &'a mut Node, needle: &str) -> Result<&'a mut Node> {
    let mut current = root;
    let mut remainder = needle;

    loop {
        if remainder.is_empty() {
            return Ok(current);
        }

        let found = search_children(&current.children, remainder);
        let matched = found.common.len();

        match found.kind {
            MatchKind::Exact | MatchKind::Substring => {
                let edge = edge_mut(&mut current.children, found.index)?;
                remainder = &remainder[matched..];
                current = &mut edge.node;
            }
            MatchKind::SharedPrefix => {
                let edge = edge_mut(&mut current.children, found.index)?;
                let new_suffix = &remainder[matched..];
                let old_suffix = edge.prefix[matched..].to_string();
                trace!(
                    edge = %edge.prefix,
                    common = found.common,
                    "splitting edge on shared prefix"
                );

                let old_node = mem::take(&mut edge.node);
                edge.prefix.truncate(matched);

                let new_branch = Edge::new(new_suffix.to_string(), Node::default());
                let old_branch = Edge::new(old_suffix, old_node);
                let (children, position) = if new_branch.prefix < old_branch.prefix {
                    (vec![new_branch, old_branch], 0)
                } else {
                    (vec![old_branch, new_branch], 1)
                };
                edge.node = Node {
                    is_leaf: false,
                    counts: None,
                    children,
                };

                remainder = "";
                current = &mut edge_mut(&mut edge.node.children, position)?.node;
            }
            MatchKind::Super => {
                let edge = edge_mut(&mut current.children, found.index)?;
                let suffix = edge.prefix[matched..].to_string();
                trace!(
                    edge = %edge.prefix,
                    common = found.common,
                    "inserting node inside edge"
                );

                let old_node = mem::take(&mut edge.node);
                edge.prefix.truncate(matched);
                edge.node = Node::with_child(&suffix, old_node);

                remainder = &remainder[matched..];
                current = &mut edge.node;
            }
            MatchKind::NoMatch => {
                if found.index > current.children.len() {
                    return Err(BayesianError::cannot_create_node(format!(
                        "insertion index {} past {} children",
                        found.index,
                        current.children.len()
                    )));
                }
                current
                    .children
                    .insert(found.index, Edge::new(remainder.to_string(), Node::default()));

                remainder = "";
                current = &mut edge_mut(&mut current.children, found.index)?.node;
            }
        }
    }
}

fn edge_mut(children: &mut [Edge], index: usize) -> Result<&mut Edge> {
    let len = children.len();
    children.get_mut(index).ok_or_else(|| {
        BayesianError::cannot_create_node(format!("no child at index {index} of {len}"))
    })
}
