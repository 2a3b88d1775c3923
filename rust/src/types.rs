//! Core types and data structures for BTree.
//!
//! This module contains the tree and node structs, the order constants, and the
//! result type that carries split effects back up the recursion.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest accepted order.
///
/// A node is split as soon as it reaches `order` keys, so an order of 2 would
/// leave an empty right sibling after every split.
pub const MIN_ORDER: usize = 3;

/// Order used by [`BTree::with_default_order`] and `Default`.
pub const DEFAULT_ORDER: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Balanced multiway search tree over ordered keys.
///
/// Every operation is a single root-to-leaf descent. Splits travel back up as
/// return values and underflow is repaired by each parent right after its
/// recursive call returns, so nodes never point at their parents and leaves
/// have no sibling links.
///
/// The tree is a multiset: inserting a key that is already present stores a
/// second copy next to the first.
///
/// # Type Parameters
///
/// * `K` - Key type, must implement `Ord`
///
/// # Examples
///
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// for key in 1..=7 {
///     tree.insert(key);
/// }
///
/// assert!(tree.search(&4));
/// assert!(!tree.search(&8));
/// assert_eq!(tree.height(), 3);
///
/// tree.erase(&4);
/// assert!(!tree.search(&4));
/// assert_eq!(tree.len(), 6);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n)
/// - **Search**: O(log n)
/// - **Deletion**: O(log n)
///
/// # Order Guidelines
///
/// - Minimum order: 3 (enforced)
/// - Between operations a node holds at most `order - 1` keys
/// - Non-root nodes hold at least `ceil(order / 2) - 1` keys
#[derive(Debug, Clone)]
pub struct BTree<K> {
    /// Branching factor; a node reaching this many keys is split.
    pub(crate) order: usize,
    /// Root node, absent while the tree is empty.
    pub(crate) root: Option<Box<Node<K>>>,
    /// Number of keys stored, duplicates included.
    pub(crate) len: usize,
}

/// A single tree node.
///
/// Leaves hold keys only. Internal nodes hold `keys.len() + 1` children, where
/// `children[i]` covers keys up to `keys[i]` and `children[i + 1]` covers keys
/// from `keys[i]` on.
///
/// Nodes are only reachable through a [`BTree`], whose order has been
/// validated, and only through shared references:
///
/// ```
/// use btree_index::BTree;
///
/// let tree = BTree::from_keys(3, 1..=7).unwrap();
/// let root = tree.root().unwrap();
/// assert_eq!(root.keys(), &[4]);
/// assert_eq!(root.children().count(), 2);
/// ```
///
/// Nodes cannot be built outside the tree:
///
/// ```compile_fail
/// use btree_index::Node;
///
/// let node = Node::<i32>::new_leaf(1);
/// ```
///
/// nor modified through the read-only view:
///
/// ```compile_fail
/// use btree_index::BTree;
///
/// let mut tree = BTree::from_keys(3, 1..=7).unwrap();
/// let root = tree.root().unwrap();
/// root.refill(7);
/// ```
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Branching factor shared with the owning tree.
    pub(crate) order: usize,
    /// Keys in non-decreasing order.
    pub(crate) keys: Vec<K>,
    /// Owned subtrees; empty for leaves.
    pub(crate) children: Vec<Box<Node<K>>>,
    /// Leaf/internal flag.
    pub(crate) is_leaf: bool,
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of an insertion into a subtree.
#[derive(Debug)]
pub(crate) enum InsertResult<K> {
    /// The key fit without the subtree root overflowing.
    Absorbed,
    /// The subtree root reached the order and was split. The caller must insert
    /// `median` into its own keys and `sibling` directly to its right.
    Split {
        median: K,
        sibling: Box<Node<K>>,
    },
}

#[cfg(test)]
impl<K> InsertResult<K> {
    /// Returns true if the insertion split the node it was applied to.
    pub(crate) fn is_split(&self) -> bool {
        matches!(self, InsertResult::Split { .. })
    }
}
