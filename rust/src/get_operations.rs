//! GET operations for BTree.
//!
//! This module contains the read operations of the tree: point search and
//! access to the smallest and largest stored keys.

use crate::types::BTree;

impl<K: Ord> BTree<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check whether a key is stored in the tree.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up
    ///
    /// # Returns
    ///
    /// `true` if at least one copy of the key is stored, `false` otherwise.
    /// An empty tree returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// assert!(!tree.search(&1));
    /// tree.insert(1);
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&2));
    /// ```
    pub fn search(&self, key: &K) -> bool {
        match &self.root {
            Some(root) => root.search(key),
            None => false,
        }
    }

    /// Alias for [`search`](Self::search).
    pub fn contains(&self, key: &K) -> bool {
        self.search(key)
    }
}

impl<K> BTree<K> {
    /// Returns the smallest key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// assert_eq!(tree.first(), None);
    /// tree.insert_all([5, 3, 9]);
    /// assert_eq!(tree.first(), Some(&3));
    /// ```
    pub fn first(&self) -> Option<&K> {
        self.root.as_ref().and_then(|root| root.subtree_min())
    }

    /// Returns the largest key in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(4).unwrap();
    /// tree.insert_all([5, 3, 9]);
    /// assert_eq!(tree.last(), Some(&9));
    /// ```
    pub fn last(&self) -> Option<&K> {
        self.root.as_ref().and_then(|root| root.subtree_max())
    }
}
