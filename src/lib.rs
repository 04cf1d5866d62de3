//! # Radix Tree
//!
//! A mutable radix tree (also known as a compressed trie or patricia trie)
//! mapping byte-string keys to values.
//!
//! Common key prefixes are stored once as a shared edge. The tree supports
//! upserting inserts, exact-key search, deletion and an explicit compaction
//! pass that merges branch points left behind by deletion.
//!
//! ## Features
//!
//! - **In-place mutation**: inserts split edges, deletes unlink leaves or demote
//!   nodes to branch points
//! - **Explicit compaction**: [`RadixTree::compact`] merges the root's
//!   redundant children, [`RadixTree::compact_all`] normalizes every level
//! - **Diagnostics**: read-only access to every node and structural statistics
//!   through [`TreeStats`]
//!
//! The tree is not synchronized. Callers sharing it across threads must
//! serialize access themselves, for example with a single `Mutex` around it.
//!
//! ## Example
//!
//! ```rust
//! use radix_mutable::RadixTree;
//!
//! let mut tree = RadixTree::new();
//!
//! tree.insert("hello", 1).unwrap();
//! tree.insert("help", 2).unwrap();
//!
//! assert_eq!(tree.get("hello"), Some(&1));
//! assert!(tree.search("hel").is_err());
//!
//! // "hel" is a shared edge with two children
//! let hel = tree.root().child(b'h').unwrap();
//! assert_eq!(hel.label(), b"hel");
//! assert_eq!(hel.child_count(), 2);
//! ```

mod error;
pub mod node;
mod stats;
mod tree;
mod util;

// Re-export public types
pub use crate::error::{Error, Result};
pub use crate::node::RadixNode;
pub use crate::stats::TreeStats;
pub use crate::tree::RadixTree;
