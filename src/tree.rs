//! The main tree implementation.
//!
//! This module contains the `RadixTree` type, which provides the primary API for
//! working with the radix tree data structure.

use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::error::{validate_key, Error, Result};
use crate::node::RadixNode;
use crate::util::{display_key, prefix_match};

/// A mutable radix tree mapping byte-string keys to values.
///
/// This Radix Tree (also known as a Patricia Trie) stores keys as chains of
/// labelled edges where every common prefix is shared by a single edge. The
/// tree is modified in place: inserting may split an edge, deleting may unlink
/// a leaf or demote a node to a plain branch point. Demoted branch points are
/// only merged back into their child by [`RadixTree::compact`] or
/// [`RadixTree::compact_all`].
///
/// Keys are compared byte by byte. Empty keys are rejected with
/// [`Error::InvalidKey`].
#[derive(Debug, Clone)]
pub struct RadixTree<V> {
    /// Sentinel node: empty label, never terminal
    pub(crate) root: RadixNode<V>,

    /// The number of keys stored in the tree
    size: usize,
}

impl<V> RadixTree<V> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::RadixTree;
    ///
    /// let tree = RadixTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTree {
            root: RadixNode::new(Vec::new()),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root sentinel, for read-only diagnostic traversal.
    pub fn root(&self) -> &RadixNode<V> {
        &self.root
    }

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// Returns `Ok(true)` once the value is stored. Re-inserting an existing
    /// key replaces its value and leaves the structure unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// assert_eq!(tree.insert("testing", 1), Ok(true));
    /// assert_eq!(tree.insert("test", 2), Ok(true));
    ///
    /// let test = tree.search("test").unwrap();
    /// assert_eq!(test.value(), Some(&2));
    /// assert_eq!(test.child_count(), 1);
    /// ```
    pub fn insert<K: AsRef<[u8]>>(&mut self, key: K, value: V) -> Result<bool> {
        let key = key.as_ref();
        validate_key(key)?;
        trace!(key = %display_key(key), "insert");

        if !Self::insert_into(&mut self.root, key, value) {
            self.size += 1;
        }
        Ok(true)
    }

    // Walks down from `node` and stores the value, splitting the edge where
    // the key diverges from it. Returns whether an existing value was replaced.
    fn insert_into(mut node: &mut RadixNode<V>, mut key: &[u8], value: V) -> bool {
        loop {
            let child = match node.children.entry(key[0]) {
                Entry::Vacant(slot) => {
                    slot.insert(RadixNode::with_value(key.to_vec(), value));
                    return false;
                }
                Entry::Occupied(slot) => slot.into_mut(),
            };

            let common = prefix_match(key, &child.label);
            let key_suffix = &key[common..];

            if common == child.label.len() {
                if key_suffix.is_empty() {
                    return child.set_value(value).is_some();
                }
                node = child;
                key = key_suffix;
                continue;
            }

            // The key diverges inside the child's label.
            child.split_at(common);
            if key_suffix.is_empty() {
                debug!(
                    label = %display_key(&child.label),
                    "two-way split, inserted key is a prefix of an existing edge"
                );
                child.set_value(value);
            } else {
                debug!(
                    label = %display_key(&child.label),
                    suffix = %display_key(key_suffix),
                    "three-way split"
                );
                child.add_child(RadixNode::with_value(key_suffix.to_vec(), value));
            }
            return false;
        }
    }

    /// Finds the terminal node stored for `key`.
    ///
    /// A node whose path matches `key` but that only serves as a branch point
    /// is not a match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty, or
    /// [`Error::KeyNotFound`] if no terminal node matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::{Error, RadixTree};
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("test", 1).unwrap();
    /// tree.insert("tea", 2).unwrap();
    ///
    /// assert_eq!(tree.search("tea").unwrap().value(), Some(&2));
    /// assert_eq!(tree.search("te").unwrap_err(), Error::KeyNotFound);
    /// ```
    pub fn search<K: AsRef<[u8]>>(&self, key: K) -> Result<&RadixNode<V>> {
        let key = key.as_ref();
        validate_key(key)?;
        trace!(key = %display_key(key), "search");

        let mut current = &self.root;
        let mut remaining = key;

        while let Some(&next_byte) = remaining.first() {
            let child = current.child(next_byte).ok_or(Error::KeyNotFound)?;

            if child.label == remaining {
                if child.terminal {
                    return Ok(child);
                }
                return Err(Error::KeyNotFound);
            }

            if !remaining.starts_with(&child.label) {
                return Err(Error::KeyNotFound);
            }

            remaining = &remaining[child.label.len()..];
            current = child;
        }

        Err(Error::KeyNotFound)
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<&V> {
        self.search(key).ok().and_then(RadixNode::value)
    }

    /// Retrieves a mutable reference to the value stored for the given key.
    pub fn get_mut<K: AsRef<[u8]>>(&mut self, key: K) -> Option<&mut V> {
        let key = key.as_ref();
        if validate_key(key).is_err() {
            return None;
        }

        let mut current = &mut self.root;
        let mut remaining = key;

        loop {
            let child = current.child_mut(remaining[0])?;
            if !remaining.starts_with(&child.label) {
                return None;
            }

            remaining = &remaining[child.label.len()..];
            if remaining.is_empty() {
                return if child.terminal {
                    child.value.as_mut()
                } else {
                    None
                };
            }
            current = child;
        }
    }

    /// Returns `true` if the tree contains a value for the given key.
    pub fn contains_key<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.search(key).is_ok()
    }

    /// Removes `key` from the tree.
    ///
    /// Returns `Ok(false)` if the key was not stored. A leaf is unlinked from
    /// its parent; a node that still has descendants is demoted to a
    /// non-terminal branch point and stays in place until compaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("ciao", 1).unwrap();
    /// tree.insert("ciaone", 2).unwrap();
    ///
    /// assert_eq!(tree.delete("ciao"), Ok(true));
    /// assert_eq!(tree.delete("ciao"), Ok(false));
    /// assert_eq!(tree.get("ciaone"), Some(&2));
    /// ```
    pub fn delete<K: AsRef<[u8]>>(&mut self, key: K) -> Result<bool> {
        self.remove(key).map(|removed| removed.is_some())
    }

    /// Removes `key` from the tree, returning the value it held.
    ///
    /// Behaves like [`RadixTree::delete`].
    pub fn remove<K: AsRef<[u8]>>(&mut self, key: K) -> Result<Option<V>> {
        let key = key.as_ref();
        validate_key(key)?;
        trace!(key = %display_key(key), "delete");

        let removed = self.remove_entry(key);
        if removed.is_some() {
            self.size -= 1;
        }
        Ok(removed)
    }

    // No parent links are stored: the first pass records the first byte of
    // every edge on the way to the key, and the second pass walks that path
    // again with mutable access.
    fn remove_entry(&mut self, key: &[u8]) -> Option<V> {
        let (path, anchor) = self.locate(key)?;

        let target = Self::descend_mut(&mut self.root, &path)?;
        if !target.is_leaf() {
            debug!(
                label = %display_key(&target.label),
                children = target.child_count(),
                "demoting node to branch point"
            );
            return target.clear_value();
        }
        let removed = target.clear_value();

        // Everything below the anchor only existed to lead to this leaf.
        let pruned = path.len() - anchor;
        let survivor = Self::descend_mut(&mut self.root, &path[..anchor])?;
        if let Some(unlinked) = survivor.children.remove(&path[anchor]) {
            debug!(label = %display_key(&unlinked.label), pruned, "unlinking leaf");
        }
        removed
    }

    // Returns the first bytes of the edges leading to the terminal node for
    // `key`, and the depth of the deepest proper ancestor that must survive
    // the removal of that node if it is a leaf (the root is depth 0).
    fn locate(&self, key: &[u8]) -> Option<(Vec<u8>, usize)> {
        let mut path = Vec::new();
        let mut anchor = 0;
        let mut current = &self.root;
        let mut remaining = key;

        while let Some(&next_byte) = remaining.first() {
            if !path.is_empty() && (current.terminal || current.child_count() != 1) {
                anchor = path.len();
            }

            let child = current.child(next_byte)?;
            if !remaining.starts_with(&child.label) {
                return None;
            }

            path.push(next_byte);
            remaining = &remaining[child.label.len()..];
            current = child;
        }

        if path.is_empty() || !current.terminal {
            return None;
        }
        Some((path, anchor))
    }

    fn descend_mut<'a>(
        mut node: &'a mut RadixNode<V>,
        path: &[u8],
    ) -> Option<&'a mut RadixNode<V>> {
        for &byte in path {
            node = node.child_mut(byte)?;
        }
        Some(node)
    }

    /// Merges every non-terminal direct child of the root that has exactly one
    /// child with that child. Returns the number of merges performed.
    ///
    /// This is a shallow pass: each child of the root is visited once and
    /// nothing below it is inspected, so single-child chains deeper in the
    /// tree are left as they are. Use [`RadixTree::compact_all`] to normalize
    /// the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("ciao", 1).unwrap();
    /// tree.insert("ciaone", 2).unwrap();
    /// tree.delete("ciao").unwrap();
    ///
    /// assert_eq!(tree.compact(), 1);
    /// assert_eq!(tree.root().child(b'c').unwrap().label(), b"ciaone");
    /// ```
    pub fn compact(&mut self) -> usize {
        let mut merged = 0;
        for child in self.root.children.values_mut() {
            if child.absorb_only_child() {
                debug!(label = %display_key(&child.label), "compacted root child");
                merged += 1;
            }
        }
        merged
    }

    /// Merges every non-terminal single-child node in the tree with its child,
    /// at every depth. Returns the number of merges performed.
    ///
    /// Afterwards no node below the root is a non-terminal with exactly one
    /// child.
    pub fn compact_all(&mut self) -> usize {
        let mut merged = 0;
        let mut stack: Vec<&mut RadixNode<V>> = self.root.children.values_mut().collect();
        while let Some(node) = stack.pop() {
            while node.absorb_only_child() {
                merged += 1;
            }
            stack.extend(node.children.values_mut());
        }
        debug!(merged, "compacted tree");
        merged
    }
}

// Default implementation
impl<V> Default for RadixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
