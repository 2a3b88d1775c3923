//! Tree structure management operations for BTree.
//!
//! This module contains all tree-level operations that describe or reset the
//! overall structure: size queries, clearing, node counting and level walks.

use crate::types::{BTree, Node};
use std::collections::VecDeque;

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K> BTree<K> {
    /// Returns the number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the order the tree was created with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the root node, if the tree is not empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the number of levels: 0 for an empty tree, 1 for a lone leaf.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        self.root.as_ref().is_some_and(|root| root.is_leaf)
    }

    /// Remove all keys, keeping the order.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.levels().iter().map(Vec::len).sum()
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.levels().last().map_or(0, Vec::len)
    }

    /// Walk the tree breadth-first, returning the nodes of each level from the
    /// root down, each level ordered left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let tree = BTree::from_keys(3, 1..=7).unwrap();
    /// let levels = tree.levels();
    /// assert_eq!(levels.len(), 3);
    /// assert_eq!(levels[0][0].keys(), &[4]);
    /// assert_eq!(levels[2].len(), 4);
    /// ```
    pub fn levels(&self) -> Vec<Vec<&Node<K>>> {
        let mut levels: Vec<Vec<&Node<K>>> = Vec::new();
        let mut queue: VecDeque<(usize, &Node<K>)> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back((0, root));
        }

        while let Some((depth, node)) = queue.pop_front() {
            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(node);
            for child in node.children() {
                queue.push_back((depth + 1, child));
            }
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_structure() {
        let tree = BTree::<i32>::new(3).unwrap();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.leaf_count(), 0);
        assert!(tree.levels().is_empty());
        assert!(!tree.is_leaf_root());
    }

    #[test]
    fn test_counts_after_splits() {
        let tree = BTree::from_keys(3, 1..=7).unwrap();
        // root [4], level 1 [2] [6], leaves [1] [3] [5] [7]
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.leaf_count(), 4);

        let level_keys: Vec<Vec<Vec<i32>>> = tree
            .levels()
            .iter()
            .map(|level| level.iter().map(|node| node.keys().to_vec()).collect())
            .collect();
        assert_eq!(
            level_keys,
            vec![
                vec![vec![4]],
                vec![vec![2], vec![6]],
                vec![vec![1], vec![3], vec![5], vec![7]],
            ]
        );
    }

    #[test]
    fn test_clear_keeps_order() {
        let mut tree = BTree::from_keys(5, 0..100).unwrap();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.order(), 5);
        assert!(tree.root().is_none());

        tree.insert(1);
        assert!(tree.is_leaf_root());
        assert_eq!(tree.len(), 1);
    }
}
