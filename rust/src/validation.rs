//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, in-order snapshots used by tests,
//! and a plain-text outline of the tree for inspection.

use crate::error::{BTreeError, BTreeResult, TreeResult};
use crate::types::{BTree, Node};
use std::fmt;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord + fmt::Debug> BTree<K> {
    /// Check every structural invariant, reporting the first violation.
    ///
    /// Checked: key order inside and across nodes, child counts, node
    /// occupancy (the root is exempt from the minimum), equal leaf depth, and
    /// the stored key count.
    pub fn validate(&self) -> BTreeResult<()> {
        let Some(root) = self.root.as_deref() else {
            if self.len != 0 {
                return Err(BTreeError::corrupted_tree(
                    "Length",
                    &format!("empty tree reports {} keys", self.len),
                ));
            }
            return Ok(());
        };

        if root.keys.is_empty() {
            return Err(BTreeError::corrupted_tree(
                "Root",
                "root holds no keys and was not collapsed",
            ));
        }

        let mut leaf_depth = None;
        let counted = self.check_node(root, None, None, 0, true, &mut leaf_depth)?;
        if counted != self.len {
            return Err(BTreeError::corrupted_tree(
                "Length",
                &format!("{} keys in nodes vs {} reported", counted, self.len),
            ));
        }
        Ok(())
    }

    /// Recursively check a node and its subtree, returning its key count.
    fn check_node(
        &self,
        node: &Node<K>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        is_root: bool,
        leaf_depth: &mut Option<usize>,
    ) -> TreeResult<usize> {
        if node.order != self.order {
            return Err(BTreeError::corrupted_tree(
                "Node",
                &format!("order {} at depth {} in a tree of order {}", node.order, depth, self.order),
            ));
        }

        // Occupancy
        if node.keys.len() > node.max_keys() {
            return Err(BTreeError::corrupted_tree(
                "Occupancy",
                &format!("{} keys exceed maximum {} at depth {}", node.keys.len(), node.max_keys(), depth),
            ));
        }
        if !is_root && node.is_underfull() {
            return Err(BTreeError::corrupted_tree(
                "Occupancy",
                &format!("{} keys below minimum {} at depth {}", node.keys.len(), node.min_keys(), depth),
            ));
        }

        // Ordering within the node and against the separators above it
        if let Some(i) = (1..node.keys.len()).find(|&i| node.keys[i - 1] > node.keys[i]) {
            return Err(BTreeError::corrupted_tree(
                "Order",
                &format!("{:?} before {:?} at depth {}", node.keys[i - 1], node.keys[i], depth),
            ));
        }
        if let (Some(min), Some(first)) = (lower, node.keys.first()) {
            if first < min {
                return Err(BTreeError::corrupted_tree(
                    "Order",
                    &format!("{:?} below separator {:?} at depth {}", first, min, depth),
                ));
            }
        }
        if let (Some(max), Some(last)) = (upper, node.keys.last()) {
            if last > max {
                return Err(BTreeError::corrupted_tree(
                    "Order",
                    &format!("{:?} above separator {:?} at depth {}", last, max, depth),
                ));
            }
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(BTreeError::corrupted_tree(
                    "Leaf",
                    &format!("leaf at depth {} has {} children", depth, node.children.len()),
                ));
            }
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(BTreeError::corrupted_tree(
                        "Balance",
                        &format!("leaf at depth {} but first leaf at depth {}", depth, expected),
                    ));
                }
                Some(_) => {}
            }
            return Ok(node.keys.len());
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(BTreeError::corrupted_tree(
                "Internal",
                &format!(
                    "{} keys with {} children at depth {}",
                    node.keys.len(),
                    node.children.len(),
                    depth
                ),
            ));
        }

        let mut total = node.keys.len();
        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = if i == node.keys.len() { upper } else { node.keys.get(i) };
            total += self.check_node(child, child_lower, child_upper, depth + 1, false, leaf_depth)?;
        }
        Ok(total)
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K: Clone> BTree<K> {
    /// Returns all keys in order (for testing/debugging).
    pub fn keys_in_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        if let Some(root) = self.root.as_deref() {
            collect_in_order(root, &mut keys);
        }
        keys
    }
}

fn collect_in_order<K: Clone>(node: &Node<K>, out: &mut Vec<K>) {
    if node.is_leaf {
        out.extend_from_slice(&node.keys);
        return;
    }
    for (i, key) in node.keys.iter().enumerate() {
        collect_in_order(&node.children[i], out);
        out.push(key.clone());
    }
    if let Some(last) = node.children.last() {
        collect_in_order(last, out);
    }
}

impl<K> BTree<K> {
    /// Returns the depth of every leaf, left to right (for testing/debugging).
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        if let Some(root) = self.root.as_deref() {
            collect_leaf_depths(root, 0, &mut depths);
        }
        depths
    }
}

fn collect_leaf_depths<K>(node: &Node<K>, depth: usize, out: &mut Vec<usize>) {
    if node.is_leaf {
        out.push(depth);
    }
    for child in node.children() {
        collect_leaf_depths(child, depth + 1, out);
    }
}

/// Outline rendering: every node is labelled with its key range and lists its
/// keys interleaved with its subtrees.
impl<K: fmt::Display> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => fmt_node(f, root, 0),
            None => writeln!(f, "empty"),
        }
    }
}

fn fmt_node<K: fmt::Display>(f: &mut fmt::Formatter<'_>, node: &Node<K>, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match (node.subtree_min(), node.subtree_max()) {
        (Some(min), Some(max)) => writeln!(f, "{}node {} - {}", indent, min, max)?,
        _ => writeln!(f, "{}node", indent)?,
    }

    for (i, key) in node.keys.iter().enumerate() {
        if let Some(child) = node.children.get(i) {
            fmt_node(f, child, depth + 1)?;
        }
        writeln!(f, "{}  key {}", indent, key)?;
    }
    if let Some(last) = node.children.get(node.keys.len()) {
        fmt_node(f, last, depth + 1)?;
    }
    Ok(())
}
