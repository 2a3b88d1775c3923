//! DELETE operations for BTree.
//!
//! This module contains key removal, the root collapse that shrinks the tree
//! after merges empty the root, and the strict and replacing variants built on
//! top of them.

use crate::error::{BTreeError, ModifyResult};
use crate::types::BTree;

impl<K: Ord> BTree<K> {
    /// Remove one copy of a key from the tree.
    ///
    /// Erasing an absent key, or erasing from an empty tree, is a no-op. Use
    /// [`try_erase`](Self::try_erase) to have absence reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert_all(1..=7);
    /// tree.erase(&4);
    /// tree.erase(&100);
    /// assert!(!tree.search(&4));
    /// assert_eq!(tree.len(), 6);
    /// ```
    pub fn erase(&mut self, key: &K) {
        let removed = match self.root.as_mut() {
            Some(root) => root.erase(key),
            None => return,
        };

        if removed {
            self.len -= 1;
            self.collapse_root();
        }
    }

    /// Remove one copy of a key, reporting a missing key as an error.
    ///
    /// # Returns
    ///
    /// `Ok(())` if a key was removed, `Err(BTreeError::KeyNotFound)` otherwise.
    /// The tree is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::{BTree, BTreeError};
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(1);
    /// assert!(tree.try_erase(&1).is_ok());
    /// assert_eq!(tree.try_erase(&1), Err(BTreeError::KeyNotFound));
    /// ```
    pub fn try_erase(&mut self, key: &K) -> ModifyResult<()> {
        let before = self.len;
        self.erase(key);
        if self.len < before {
            Ok(())
        } else {
            Err(BTreeError::KeyNotFound)
        }
    }

    /// Replace one copy of `from` with `to`.
    ///
    /// Nothing happens when `from` is not stored.
    ///
    /// # Returns
    ///
    /// `true` if `from` was present and has been replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert_all([1, 2, 3]);
    /// assert!(tree.replace(&2, 20));
    /// assert!(!tree.replace(&2, 30));
    /// assert_eq!(tree.keys_in_order(), vec![1, 3, 20]);
    /// ```
    pub fn replace(&mut self, from: &K, to: K) -> bool {
        if !self.search(from) {
            return false;
        }
        self.erase(from);
        self.insert(to);
        true
    }

    /// Remove and return the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::from_keys(3, [4, 1, 3]).unwrap();
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.keys_in_order(), vec![3, 4]);
    /// ```
    pub fn pop_first(&mut self) -> Option<K> {
        let key = self.root.as_mut()?.pop_min()?;
        self.len -= 1;
        self.collapse_root();
        Some(key)
    }

    /// Remove and return the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let key = self.root.as_mut()?.pop_max()?;
        self.len -= 1;
        self.collapse_root();
        Some(key)
    }

    /// Shrink the tree once merges have emptied the root.
    ///
    /// An empty internal root is replaced by its only child; an empty leaf
    /// root leaves the tree empty.
    fn collapse_root(&mut self) {
        let Some(root) = self.root.as_mut() else {
            return;
        };
        if !root.is_empty() {
            return;
        }

        if root.is_leaf {
            self.root = None;
        } else {
            debug_assert_eq!(root.children.len(), 1, "empty internal root must have one child");
            let only_child = root.children.pop();
            self.root = only_child;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(height = self.height(), "root emptied, tree shrank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_from_empty_tree() {
        let mut tree = BTree::<i32>::new(3).unwrap();
        tree.erase(&1);
        assert!(tree.is_empty());
        assert_eq!(tree.try_erase(&1), Err(BTreeError::KeyNotFound));
    }

    #[test]
    fn test_erase_last_key_empties_tree() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert(1);
        tree.erase(&1);

        assert!(tree.root().is_none());
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_root_collapse_reduces_height() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert_all([1, 2, 3]);
        assert_eq!(tree.height(), 2);

        tree.erase(&1);

        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.keys(), &[2, 3]);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_erase_absent_key_keeps_structure() {
        let mut tree = BTree::new(4).unwrap();
        tree.insert_all((0..50).map(|i| i * 2));
        let before = tree.keys_in_order();
        let height = tree.height();

        for key in [-1, 1, 33, 99, 1000] {
            tree.erase(&key);
        }

        assert_eq!(tree.keys_in_order(), before);
        assert_eq!(tree.height(), height);
        assert_eq!(tree.len(), 50);
    }

    #[test]
    fn test_erase_one_duplicate_at_a_time() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert_all([5, 5, 5, 1, 9]);

        tree.erase(&5);
        assert_eq!(tree.keys_in_order(), vec![1, 5, 5, 9]);
        tree.erase(&5);
        tree.erase(&5);
        assert!(!tree.search(&5));
        assert_eq!(tree.keys_in_order(), vec![1, 9]);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_replace_missing_key_does_nothing() {
        let mut tree = BTree::new(3).unwrap();
        tree.insert_all([1, 2]);
        assert!(!tree.replace(&7, 8));
        assert_eq!(tree.keys_in_order(), vec![1, 2]);
    }

    #[test]
    fn test_try_erase_counts() {
        let mut tree = BTree::new(5).unwrap();
        tree.insert_all(0..20);
        for key in 0..20 {
            assert!(tree.try_erase(&key).is_ok());
        }
        assert!(tree.is_empty());
        assert!(tree.try_erase(&0).is_err());
    }

    #[test]
    fn test_pop_first_and_last_drain_in_order() {
        let mut tree = BTree::from_keys(4, (0..40).rev()).unwrap();
        let mut low = 0;
        let mut high = 39;

        while !tree.is_empty() {
            assert_eq!(tree.pop_first(), Some(low));
            low += 1;
            if tree.is_empty() {
                break;
            }
            assert_eq!(tree.pop_last(), Some(high));
            high -= 1;
            assert!(tree.validate().is_ok(), "after popping {} and {}", low - 1, high + 1);
            assert_eq!(tree.len() as i32, high - low + 1);
        }

        assert!(tree.root().is_none());
        assert_eq!(tree.pop_first(), None);
        assert_eq!(tree.pop_last(), None);
    }
}
