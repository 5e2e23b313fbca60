//! Sibling matching for radix tree descent.
//!
//! Siblings never share a leading character, so a needle can relate to at
//! most one of them: the first sibling sorting at or after the needle, or
//! the one immediately before it.

use crate::radix::node::Edge;

/// How a search string relates to the sibling edge that was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// No sibling shares a leading character with the needle.
    NoMatch,
    /// The sibling and the needle share a proper, non-empty prefix.
    SharedPrefix,
    /// The needle strictly extends the sibling's label.
    Substring,
    /// The sibling's label equals the needle.
    Exact,
    /// The sibling's label strictly extends the needle.
    Super,
}

/// Result of [`search_children`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildMatch<'a> {
    /// Index of the referenced sibling, or the insertion point on `NoMatch`.
    pub index: usize,
    /// Relation between the needle and the sibling.
    pub kind: MatchKind,
    /// Longest common prefix of the needle and the sibling label.
    pub common: &'a str,
}

impl<'a> ChildMatch<'a> {
    fn new(index: usize, kind: MatchKind, common: &'a str) -> Self {
        ChildMatch {
            index,
            kind,
            common,
        }
    }
}

/// Longest common prefix of two strings, never splitting a code point.
///
/// The returned slice borrows from `needle`.
pub fn longest_common_prefix<'a>(label: &str, needle: &'a str) -> &'a str {
    let end = needle
        .char_indices()
        .zip(label.chars())
        .take_while(|((_, a), b)| a == b)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);

    &needle[..end]
}

/// Locate the sibling edge a non-empty needle relates to.
///
/// `children` must be sorted by label. Runs a binary search over the
/// labels followed by at most two common-prefix scans.
pub fn search_children<'a>(children: &[Edge], needle: &'a str) -> ChildMatch<'a> {
    if children.is_empty() {
        return ChildMatch::new(0, MatchKind::NoMatch, "");
    }

    // UTF-8 byte order is code point order, so `str` comparison suffices.
    let idx = children.partition_point(|edge| edge.prefix.as_str() < needle);

    if let Some(edge) = children.get(idx) {
        if edge.prefix == needle {
            return ChildMatch::new(idx, MatchKind::Exact, needle);
        }

        let common = longest_common_prefix(&edge.prefix, needle);
        if common.len() == needle.len() {
            return ChildMatch::new(idx, MatchKind::Super, common);
        } else if !common.is_empty() {
            return ChildMatch::new(idx, MatchKind::SharedPrefix, common);
        }
    }

    if idx == 0 {
        return ChildMatch::new(0, MatchKind::NoMatch, "");
    }

    let previous = &children[idx - 1];
    let common = longest_common_prefix(&previous.prefix, needle);
    if common.len() == previous.prefix.len() {
        ChildMatch::new(idx - 1, MatchKind::Substring, common)
    } else if !common.is_empty() {
        ChildMatch::new(idx - 1, MatchKind::SharedPrefix, common)
    } else {
        ChildMatch::new(idx, MatchKind::NoMatch, "")
    }
}
