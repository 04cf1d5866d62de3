//! Structural statistics for a radix tree.
//!
//! `TreeStats` summarizes the shape of a tree for diagnostics and for
//! measuring what a compaction pass achieved.

use crate::node::RadixNode;
use crate::tree::RadixTree;

/// A snapshot of the shape of a tree. The root sentinel is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TreeStats {
    /// Number of nodes below the root
    pub total_nodes: usize,

    /// Nodes without children
    pub leaf_nodes: usize,

    /// Nodes with at least one child
    pub internal_nodes: usize,

    /// Nodes whose path is a stored key
    pub terminal_nodes: usize,

    /// Depth of the deepest node; children of the root are at depth 1
    pub max_depth: usize,

    /// Mean depth over all counted nodes, 0.0 for an empty tree
    pub avg_depth: f64,
}

impl TreeStats {
    /// Collects statistics for every node below `root`.
    pub fn collect<V>(root: &RadixNode<V>) -> Self {
        let mut stats = TreeStats::default();
        let mut total_depth = 0usize;

        let mut stack: Vec<(&RadixNode<V>, usize)> = root.children().map(|c| (c, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            stats.total_nodes += 1;
            total_depth += depth;
            stats.max_depth = stats.max_depth.max(depth);

            if node.is_terminal() {
                stats.terminal_nodes += 1;
            }
            if node.is_leaf() {
                stats.leaf_nodes += 1;
            } else {
                stats.internal_nodes += 1;
                stack.extend(node.children().map(|c| (c, depth + 1)));
            }
        }

        if stats.total_nodes > 0 {
            stats.avg_depth = total_depth as f64 / stats.total_nodes as f64;
        }
        stats
    }
}

impl<V> RadixTree<V> {
    /// Returns structural statistics for the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::RadixTree;
    ///
    /// let mut tree = RadixTree::new();
    /// tree.insert("test", 1).unwrap();
    /// tree.insert("team", 2).unwrap();
    ///
    /// let stats = tree.stats();
    /// assert_eq!(stats.total_nodes, 3);
    /// assert_eq!(stats.terminal_nodes, 2);
    /// assert_eq!(stats.max_depth, 2);
    /// ```
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_stats() {
        let tree: RadixTree<u32> = RadixTree::new();
        assert_eq!(tree.stats(), TreeStats::default());
    }

    #[test]
    fn test_stats_counts() {
        let mut tree = RadixTree::new();
        for (i, key) in ["ciao", "ciaone", "ciauz", "help", "helper", "cia", "test"]
            .iter()
            .enumerate()
        {
            tree.insert(key, i).unwrap();
        }

        // cia -> {o -> ne, uz}, help -> er, test
        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 7);
        assert_eq!(stats.terminal_nodes, 7);
        assert_eq!(stats.leaf_nodes, 4);
        assert_eq!(stats.internal_nodes, 3);
        assert_eq!(stats.max_depth, 3);
        assert!((stats.avg_depth - 12.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_compaction_reduces_node_count() {
        let mut tree = RadixTree::new();
        tree.insert("ciao", 1).unwrap();
        tree.insert("ciaone", 2).unwrap();
        tree.delete("ciao").unwrap();

        let before = tree.stats();
        assert_eq!(before.total_nodes, 2);
        assert_eq!(before.terminal_nodes, 1);

        tree.compact();
        let after = tree.stats();
        assert_eq!(after.total_nodes, 1);
        assert_eq!(after.leaf_nodes, 1);
        assert_eq!(after.max_depth, 1);
    }
}
