#![allow(dead_code)]

use radix_mutable::{RadixNode, RadixTree};

/// Walks the whole tree and asserts the structural invariants that every
/// public operation must preserve.
pub fn assert_invariants<V>(tree: &RadixTree<V>) {
    let root = tree.root();
    assert!(root.label().is_empty(), "root must carry an empty label");
    assert!(!root.is_terminal(), "root must never be terminal");
    assert!(
        root.has_prefix_free_children(),
        "root children share a leading byte"
    );
    assert_eq!(
        root.subtree_size(),
        tree.len(),
        "terminal node count must match len()"
    );

    let mut stack: Vec<&RadixNode<V>> = root.children().collect();
    while let Some(node) = stack.pop() {
        assert!(!node.label().is_empty(), "empty label below the root");
        assert!(
            node.has_prefix_free_children(),
            "children of {:?} share a leading byte",
            node.label_lossy()
        );
        assert_eq!(
            node.is_terminal(),
            node.value().is_some(),
            "terminal flag and value disagree at {:?}",
            node.label_lossy()
        );
        assert!(
            node.is_terminal() || !node.is_leaf(),
            "dead non-terminal leaf {:?}",
            node.label_lossy()
        );
        stack.extend(node.children());
    }
}

/// Asserts that no node below the root is a non-terminal with a single child.
pub fn assert_fully_compact<V>(tree: &RadixTree<V>) {
    let mut stack: Vec<&RadixNode<V>> = tree.root().children().collect();
    while let Some(node) = stack.pop() {
        assert!(
            node.is_terminal() || node.child_count() != 1,
            "uncompacted branch point {:?}",
            node.label_lossy()
        );
        stack.extend(node.children());
    }
}

/// Builds a tree storing `"val of <key>"` under every key.
pub fn tree_of(keys: &[&str]) -> RadixTree<String> {
    let mut tree = RadixTree::new();
    for key in keys {
        assert_eq!(tree.insert(key, format!("val of {}", key)), Ok(true));
    }
    tree
}
