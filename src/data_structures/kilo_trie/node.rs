// Copyright (c) 2025 Kilo Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Kilo Trie.
//!
//! A `TrieNode` holds one radix-compressed edge label, the values whose
//! inserted suffix ends exactly at the end of that label, and its children
//! sorted by the first character of their labels. Parents own their children
//! outright; there are no back references.
//!
//! A key made of one repeated character builds a chain as deep as the key is
//! long, so every walk over the tree (drop and clone included) runs on an
//! explicit cursor or heap stack rather than the call stack.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// A node in the Kilo Trie.
#[derive(Default)]
pub(crate) struct TrieNode {
    /// Text consumed between the parent and this node. Empty only at the root.
    label: String,

    /// Values whose inserted suffix terminates here, in insertion order.
    values: Vec<i64>,

    /// Children sorted by the first character of their label.
    children: Vec<TrieNode>,
}

impl TrieNode {
    /// Creates an empty root node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn leaf(label: &str, value: i64) -> Self {
        Self {
            label: label.to_owned(),
            values: vec![value],
            children: Vec::new(),
        }
    }

    /// Copies label and values, leaving the children to the caller.
    fn shallow_clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            values: self.values.clone(),
            children: Vec::with_capacity(self.children.len()),
        }
    }

    /// First character of the label, `None` for the root.
    fn lead(&self) -> Option<char> {
        self.label.chars().next()
    }

    /// Binary search over the children by first character.
    ///
    /// `Ok(i)` is the child whose label starts with `c`, `Err(i)` the slot
    /// where such a child would be inserted to keep the ordering.
    fn search_child(&self, c: char) -> Result<usize, usize> {
        self.children
            .binary_search_by(|child| match child.lead() {
                Some(lead) => lead.cmp(&c),
                None => Ordering::Less,
            })
    }

    /// Inserts one suffix into the subtree rooted at this node.
    pub(crate) fn add(&mut self, key: &str, value: i64) {
        let mut node = self;
        let mut key = key;
        loop {
            let common = common_prefix_len(&node.label, key);
            if common < node.label.len() {
                node.split(common);
            }

            let rest = &key[common..];
            let Some(first) = rest.chars().next() else {
                // The whole key is consumed at this node.
                node.values.push(value);
                return;
            };
            match node.search_child(first) {
                Ok(index) => {
                    node = &mut node.children[index];
                    key = rest;
                }
                Err(index) => {
                    node.children.insert(index, TrieNode::leaf(rest, value));
                    return;
                }
            }
        }
    }

    /// Shortens the label to its first `at` bytes, moving the remainder of the
    /// label along with the values and children into a single new child.
    ///
    /// `at` must lie on a char boundary strictly inside the label.
    fn split(&mut self, at: usize) {
        let tail = self.label.split_off(at);
        tracing::trace!(label = %self.label, tail = %tail, "splitting trie node");
        let moved = TrieNode {
            label: tail,
            values: mem::take(&mut self.values),
            children: mem::take(&mut self.children),
        };
        self.children.push(moved);
    }

    /// Finds the node at which `query` runs out, if any.
    ///
    /// A match is declared at the first node whose label starts with the
    /// remaining query, even when the label continues past it.
    pub(crate) fn locate(&self, query: &str) -> Option<&TrieNode> {
        let mut node = self;
        let mut query = query;
        loop {
            if node.label.starts_with(query) {
                return Some(node);
            }

            // The query outruns this label, so it must cover the whole label
            // before it can descend.
            let rest = query.strip_prefix(node.label.as_str())?;
            let first = rest.chars().next()?;
            let index = node.search_child(first).ok()?;
            node = &node.children[index];
            query = rest;
        }
    }

    /// Appends every value reachable through `query` to `dst`.
    pub(crate) fn find(&self, dst: &mut Vec<i64>, query: &str) {
        if let Some(node) = self.locate(query) {
            node.collect_values(dst);
        }
    }

    /// Returns `true` if this subtree holds at least one value.
    ///
    /// Leaves always carry a value and splits never leave a childless node
    /// empty, so only a bare root can be valueless.
    pub(crate) fn has_values(&self) -> bool {
        !self.values.is_empty() || !self.children.is_empty()
    }

    /// Appends this node's values, then every child's in ascending order.
    fn collect_values(&self, dst: &mut Vec<i64>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            dst.extend_from_slice(&node.values);
            // Reversed so the smallest child is popped first.
            stack.extend(node.children.iter().rev());
        }
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Panics if the subtree breaks the ordering or labelling rules.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self, is_root: bool) {
        let mut stack = vec![(self, is_root)];
        while let Some((node, is_root)) = stack.pop() {
            if is_root {
                assert!(node.label.is_empty(), "root label must be empty");
            } else {
                assert!(!node.label.is_empty(), "only the root may have an empty label");
            }
            for pair in node.children.windows(2) {
                assert!(
                    pair[0].lead() < pair[1].lead(),
                    "children out of order: {:?} then {:?}",
                    pair[0].label,
                    pair[1].label
                );
            }
            stack.extend(node.children.iter().map(|child| (child, false)));
        }
    }

    #[cfg(test)]
    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub(crate) fn values(&self) -> &[i64] {
        &self.values
    }

    #[cfg(test)]
    pub(crate) fn children(&self) -> &[TrieNode] {
        &self.children
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // Breadth-first order puts every parent before its children.
        let mut sources: Vec<(&TrieNode, usize)> = vec![(self, 0)];
        let mut next = 0;
        while next < sources.len() {
            let node = sources[next].0;
            sources.extend(node.children.iter().map(|child| (child, next)));
            next += 1;
        }

        let mut copies: Vec<TrieNode> = sources.iter().map(|(node, _)| node.shallow_clone()).collect();
        // Attach from the back, so each copy is complete before it moves into
        // its parent. Siblings arrive in descending order and are flipped once
        // their parent is reached.
        while copies.len() > 1 {
            let index = copies.len() - 1;
            let mut copy = copies.pop().unwrap_or_default();
            copy.children.reverse();
            copies[sources[index].1].children.push(copy);
        }
        let mut root = copies.pop().unwrap_or_default();
        root.children.reverse();
        root
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack = mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("label", &self.label)
            .field("values", &self.values)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Byte length of the longest common prefix of `a` and `b`, compared one
/// character at a time so the result always lands on a char boundary.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    // One string being a prefix of the other is the common case while
    // suffixes of a repetitive key are added, and a slice compare is linear
    // with a small constant.
    let shorter = a.len().min(b.len());
    if a.as_bytes()[..shorter] == b.as_bytes()[..shorter] {
        return shorter;
    }

    a.chars()
        .zip(b.chars())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(c, _)| c.len_utf8())
        .sum()
}
