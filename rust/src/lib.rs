//! In-memory B-tree index.
//!
//! This crate provides [`BTree`], a balanced multiway search tree over ordered
//! keys with logarithmic insert, point search and delete. All leaves stay at
//! the same depth and every non-root node stays between half full and full.
//!
//! # Example
//!
//! ```
//! use btree_index::BTree;
//!
//! let mut tree = BTree::new(4).unwrap();
//! tree.insert_all([8, 3, 5, 1, 9, 2]);
//!
//! assert!(tree.search(&5));
//! tree.erase(&5);
//! assert!(!tree.search(&5));
//!
//! assert_eq!(tree.keys_in_order(), vec![1, 2, 3, 8, 9]);
//! assert!(tree.validate().is_ok());
//! ```
//!
//! # Structure
//!
//! Nodes own their children through `Box` and never point back at their
//! parent. Insertion reports a node split to the caller as a return
//! value, and deletion repairs an underfull child from its parent by
//! borrowing a key from a sibling or merging with it. The root is grown when it
//! splits and collapsed when merges leave it empty.
//!
//! Read-only access to [`Node`]s through [`BTree::root`] and [`BTree::levels`]
//! is enough to draw the tree without touching it.
//!
//! # Features
//!
//! - **`tracing`** - emit `tracing` events for root growth, root collapse,
//!   splits, borrows and merges

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use construction::validation as order_validation;
pub use error::{BTreeError, BTreeResult, InitResult, ModifyResult};
pub use types::{BTree, Node, DEFAULT_ORDER, MIN_ORDER};
