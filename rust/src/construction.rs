//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains order validation, tree construction, node constructors
//! and the `Default` implementations.

use crate::error::{BTreeError, BTreeResult, InitResult};
use crate::types::{BTree, Node, DEFAULT_ORDER, MIN_ORDER};

impl<K> BTree<K> {
    /// Create an empty B-tree with the specified order.
    ///
    /// # Arguments
    ///
    /// * `order` - Branching factor; a node reaching this many keys splits (minimum 3)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the order is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let tree = BTree::<u64>::new(4).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<u64>::new(1).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        validation::validate_order(order)?;

        // The root is created lazily by the first insert
        Ok(Self {
            order,
            root: None,
            len: 0,
        })
    }

    /// Create a B-tree with the default order.
    ///
    /// This is equivalent to calling `new(DEFAULT_ORDER)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::{BTree, DEFAULT_ORDER};
    ///
    /// let tree = BTree::<i32>::with_default_order().unwrap();
    /// assert_eq!(tree.order(), DEFAULT_ORDER);
    /// ```
    pub fn with_default_order() -> InitResult<Self> {
        Self::new(DEFAULT_ORDER)
    }
}

impl<K> Node<K> {
    /// Creates an empty leaf node.
    pub(crate) fn new_leaf(order: usize) -> Self {
        // One slot of headroom for the transient overflow before a split
        Self {
            order,
            keys: Vec::with_capacity(order),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Creates an empty internal node.
    pub(crate) fn new_internal(order: usize) -> Self {
        Self {
            order,
            keys: Vec::with_capacity(order),
            children: Vec::with_capacity(order + 1),
            is_leaf: false,
        }
    }

    /// Creates the internal node that replaces the root after a root split.
    ///
    /// The new node holds `median` as its only key, with `left` (the old root)
    /// and `right` (the split-off sibling) as its two children.
    pub(crate) fn new_root(order: usize, median: K, left: Box<Node<K>>, right: Box<Node<K>>) -> Self {
        let mut root = Self::new_internal(order);
        root.keys.push(median);
        root.children.push(left);
        root.children.push(right);
        root
    }
}

// Default implementations
impl<K> Default for BTree<K> {
    /// Create an empty B-tree with default order.
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            root: None,
            len: 0,
        }
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that an order is usable as a branching factor.
    ///
    /// # Arguments
    ///
    /// * `order` - The order to validate
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if valid, `Err(BTreeError)` otherwise.
    pub fn validate_order(order: usize) -> BTreeResult<()> {
        if order < MIN_ORDER {
            Err(BTreeError::invalid_order(order, MIN_ORDER))
        } else {
            Ok(())
        }
    }

    /// Get the recommended order for a given expected number of keys.
    ///
    /// Small trees favour narrow nodes so that rebalancing stays cheap; large
    /// trees favour wide nodes so that the tree stays shallow.
    ///
    /// # Arguments
    ///
    /// * `expected_keys` - Expected number of keys in the tree
    ///
    /// # Returns
    ///
    /// Recommended order (always >= MIN_ORDER)
    pub fn recommended_order(expected_keys: usize) -> usize {
        if expected_keys < 100 {
            4
        } else if expected_keys < 10_000 {
            DEFAULT_ORDER
        } else if expected_keys < 1_000_000 {
            64
        } else {
            256
        }
    }
}
