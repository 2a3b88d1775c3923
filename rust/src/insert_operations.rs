//! INSERT operations for BTree.
//!
//! This module contains key insertion, root growth after a root split, and the
//! bulk population helpers used to load externally generated key sequences.

use crate::error::InitResult;
use crate::types::{BTree, InsertResult, Node};

impl<K: Ord> BTree<K> {
    /// Insert a key into the tree.
    ///
    /// Duplicates are kept: inserting a key that is already present stores
    /// another copy. A split that reaches the root grows the tree by one level,
    /// which is the only way the tree gains depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, key: K) {
        let order = self.order;
        let root = self
            .root
            .get_or_insert_with(|| Box::new(Node::new_leaf(order)));

        if let InsertResult::Split { median, sibling } = root.insert(key) {
            self.grow_root(median, sibling);
        }
        self.len += 1;
    }

    /// Replace the root with a new internal node holding `median`, with the
    /// old root and `sibling` as its two children.
    fn grow_root(&mut self, median: K, sibling: Box<Node<K>>) {
        if let Some(old_root) = self.root.take() {
            let new_root = Node::new_root(self.order, median, old_root, sibling);

            #[cfg(feature = "tracing")]
            tracing::debug!(height = new_root.height(), "root split, tree grew");

            self.root = Some(Box::new(new_root));
        }
    }

    /// Insert every key produced by an iterator, in iteration order.
    ///
    /// Works for ascending, descending and random sequences alike.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(5).unwrap();
    /// tree.insert_all(vec![3, 1, 2]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn insert_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Build a tree of the given order from a key sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let tree = BTree::from_keys(4, 0..100u64).unwrap();
    /// assert_eq!(tree.len(), 100);
    /// assert!(tree.search(&99));
    /// ```
    pub fn from_keys<I>(order: usize, keys: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new(order)?;
        tree.insert_all(keys);
        Ok(tree)
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, K: Ord + Copy + 'a> Extend<&'a K> for BTree<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}
