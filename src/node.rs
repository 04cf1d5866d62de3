//! Node implementation for the radix tree.
//!
//! A `RadixNode` is an edge label plus the subtree hanging below it. Nodes are
//! exclusively owned by their parent's child map; no node holds a reference to
//! its parent.

use std::borrow::Cow;
use std::collections::HashMap;
use std::mem;

/// A node of the radix tree.
///
/// Each node carries a label (the key fragment it contributes), an optional
/// value that is only meaningful while the node is terminal, and its children.
/// Children are indexed by the first byte of their label: no two siblings may
/// share a leading byte, so at most one child can continue a given key.
#[derive(Debug)]
pub struct RadixNode<V> {
    /// The key fragment stored at this node
    pub(crate) label: Vec<u8>,

    /// The value stored at this node, if it is terminal
    pub(crate) value: Option<V>,

    /// Whether the path from the root to this node is a stored key
    pub(crate) terminal: bool,

    /// Child nodes indexed by the first byte of their label
    pub(crate) children: HashMap<u8, RadixNode<V>>,
}

impl<V> RadixNode<V> {
    /// Creates a new non-terminal node with the given label
    pub(crate) fn new(label: Vec<u8>) -> Self {
        RadixNode {
            label,
            value: None,
            terminal: false,
            children: HashMap::new(),
        }
    }

    /// Creates a new terminal leaf with the given label and value
    pub(crate) fn with_value(label: Vec<u8>, value: V) -> Self {
        RadixNode {
            label,
            value: Some(value),
            terminal: true,
            children: HashMap::new(),
        }
    }

    /// Returns the raw key fragment of this node.
    pub fn label(&self) -> &[u8] {
        &self.label
    }

    /// Returns the key fragment as text, replacing invalid UTF-8 sequences.
    pub fn label_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.label)
    }

    /// Returns the stored value if this node is terminal.
    pub fn value(&self) -> Option<&V> {
        if self.terminal {
            self.value.as_ref()
        } else {
            None
        }
    }

    /// Returns whether the path from the root to this node is a stored key.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the child whose label starts with `first_byte`, if any.
    pub fn child(&self, first_byte: u8) -> Option<&RadixNode<V>> {
        self.children.get(&first_byte)
    }

    /// Iterates over the direct children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &RadixNode<V>> + '_ {
        self.children.values()
    }

    /// Returns the number of stored keys in this subtree, this node included.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.terminal {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// Checks that every child is indexed by its own non-empty label's first
    /// byte, which makes sibling labels prefix-free on their leading byte.
    pub fn has_prefix_free_children(&self) -> bool {
        self.children
            .iter()
            .all(|(byte, child)| child.label.first() == Some(byte))
    }

    pub(crate) fn child_mut(&mut self, first_byte: u8) -> Option<&mut RadixNode<V>> {
        self.children.get_mut(&first_byte)
    }

    /// Adds `child` under its leading byte. Labels are never empty below the root.
    pub(crate) fn add_child(&mut self, child: RadixNode<V>) {
        debug_assert!(!child.label.is_empty());
        let first_byte = child.label[0];
        let previous = self.children.insert(first_byte, child);
        debug_assert!(previous.is_none());
    }

    /// Marks this node terminal with `value`, returning the value it replaced.
    pub(crate) fn set_value(&mut self, value: V) -> Option<V> {
        let previous = if self.terminal { self.value.take() } else { None };
        self.terminal = true;
        self.value = Some(value);
        previous
    }

    /// Demotes this node to a pure branch point, returning its old value.
    pub(crate) fn clear_value(&mut self) -> Option<V> {
        self.terminal = false;
        self.value.take()
    }

    /// Truncates the label to its first `at` bytes and pushes everything this
    /// node used to represent past that point into a single orphan child.
    ///
    /// After the split this node is a non-terminal with exactly one child.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let orphan = RadixNode {
            label: self.label.split_off(at),
            value: self.value.take(),
            terminal: mem::replace(&mut self.terminal, false),
            children: mem::take(&mut self.children),
        };
        self.add_child(orphan);
    }

    /// Merges a non-terminal node with its only child: labels are
    /// concatenated and the child's state and children are adopted.
    ///
    /// Returns whether a merge happened. The leading byte of the label does
    /// not change, so the parent's index stays valid.
    pub(crate) fn absorb_only_child(&mut self) -> bool {
        if self.terminal || self.children.len() != 1 {
            return false;
        }
        let mut only_child = match self.children.drain().next() {
            Some((_, child)) => child,
            None => return false,
        };
        self.label.extend_from_slice(&only_child.label);
        self.value = only_child.value.take();
        self.terminal = only_child.terminal;
        self.children = mem::take(&mut only_child.children);
        true
    }

    /// Copies label, value and terminal flag without any children.
    fn clone_detached(&self) -> Self
    where
        V: Clone,
    {
        RadixNode {
            label: self.label.clone(),
            value: self.value.clone(),
            terminal: self.terminal,
            children: HashMap::new(),
        }
    }
}

// Cloning and dropping walk the subtree with an explicit work-list, so a
// chain of any depth never recurses once per level.
impl<V: Clone> Clone for RadixNode<V> {
    fn clone(&self) -> Self {
        let mut copy = self.clone_detached();

        // Breadth-first order: every parent index is smaller than its children's.
        let mut order: Vec<(&RadixNode<V>, Option<usize>)> =
            self.children.values().map(|child| (child, None)).collect();
        let mut i = 0;
        while i < order.len() {
            let node = order[i].0;
            order.extend(node.children.values().map(|child| (child, Some(i))));
            i += 1;
        }

        let mut built: Vec<RadixNode<V>> =
            order.iter().map(|(node, _)| node.clone_detached()).collect();
        while let Some(node) = built.pop() {
            match order[built.len()].1 {
                Some(parent) => built[parent].add_child(node),
                None => copy.add_child(node),
            }
        }
        copy
    }
}

impl<V> Drop for RadixNode<V> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending: Vec<RadixNode<V>> =
            self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
