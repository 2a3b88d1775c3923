//! Node implementation for BTree.
//!
//! This module contains everything a node does on its own subtree: search,
//! insertion with splitting, deletion with predecessor substitution, and the
//! borrow/merge repair a parent applies to an underfull child.

use crate::types::{InsertResult, Node};

// ============================================================================
// READ-ONLY STRUCTURE ACCESS
// ============================================================================

impl<K> Node<K> {
    /// Returns the keys of this node in order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns the order this node was created with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns an iterator over the children of this node, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Node<K>> + '_ {
        self.children.iter().map(|child| child.as_ref())
    }

    /// Returns the child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<&Node<K>> {
        self.children.get(index).map(|child| child.as_ref())
    }

    /// Returns the subtree holding keys up to `keys()[key_index]`.
    pub fn left_child(&self, key_index: usize) -> Option<&Node<K>> {
        if key_index < self.keys.len() {
            self.child(key_index)
        } else {
            None
        }
    }

    /// Returns the subtree holding keys from `keys()[key_index]` on.
    pub fn right_child(&self, key_index: usize) -> Option<&Node<K>> {
        if key_index < self.keys.len() {
            self.child(key_index + 1)
        } else {
            None
        }
    }

    /// Returns the smallest key in the subtree rooted here.
    pub fn subtree_min(&self) -> Option<&K> {
        let mut current = self;
        while let Some(first) = current.children.first() {
            current = first;
        }
        current.keys.first()
    }

    /// Returns the largest key in the subtree rooted here.
    pub fn subtree_max(&self) -> Option<&K> {
        let mut current = self;
        while let Some(last) = current.children.last() {
            current = last;
        }
        current.keys.last()
    }

    /// Returns the number of levels in the subtree rooted here (1 for a leaf).
    pub fn height(&self) -> usize {
        let mut levels = 1;
        let mut current = self;
        while let Some(first) = current.children.first() {
            current = first;
            levels += 1;
        }
        levels
    }

    // ============================================================================
    // OCCUPANCY
    // ============================================================================

    /// Returns the most keys a node holds between operations.
    pub fn max_keys(&self) -> usize {
        self.order - 1
    }

    /// Returns the fewest keys a non-root node holds between operations.
    pub fn min_keys(&self) -> usize {
        // ceil(order / 2) - 1, i.e. ceil(order / 2) children for internal nodes
        (self.order - 1) / 2
    }

    /// Returns true if this node has reached the order and must split.
    pub fn is_overflowing(&self) -> bool {
        self.keys.len() >= self.order
    }

    /// Returns true if this node is below minimum occupancy.
    pub fn is_underfull(&self) -> bool {
        self.keys.len() < self.min_keys()
    }

    /// Returns true if this node can give a key to a sibling and stay above minimum.
    pub fn can_donate(&self) -> bool {
        self.keys.len() > self.min_keys()
    }
}

impl<K: Ord> Node<K> {
    // ============================================================================
    // GET OPERATIONS
    // ============================================================================

    /// Returns true if `key` is stored in the subtree rooted at this node.
    pub fn search(&self, key: &K) -> bool {
        let mut current = self;
        loop {
            let index = current.lower_bound(key);
            if current.keys.get(index) == Some(key) {
                return true;
            }
            if current.is_leaf {
                return false;
            }
            current = &current.children[index];
        }
    }

    /// Index of the first key not less than `key`.
    #[inline]
    fn lower_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Index of the first key strictly greater than `key`.
    #[inline]
    fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Insert a key into this subtree, splitting this node if it reaches the order.
    ///
    /// Equal keys are placed after existing copies. A split of a child is
    /// absorbed here; a split of this node is reported to the caller.
    pub(crate) fn insert(&mut self, key: K) -> InsertResult<K> {
        let index = self.upper_bound(&key);
        if self.is_leaf {
            self.keys.insert(index, key);
        } else if let InsertResult::Split { median, sibling } = self.children[index].insert(key) {
            self.keys.insert(index, median);
            self.children.insert(index + 1, sibling);
        }

        if self.is_overflowing() {
            self.split()
        } else {
            InsertResult::Absorbed
        }
    }

    /// Split this node around its middle key.
    ///
    /// Keys after the midpoint (and the children to their right) move into a
    /// new sibling, the midpoint key is handed back for promotion, and this
    /// node keeps everything before it.
    fn split(&mut self) -> InsertResult<K> {
        debug_assert!(
            self.is_overflowing(),
            "split of a node holding {} keys with order {}",
            self.keys.len(),
            self.order
        );

        let mid = self.keys.len() / 2;
        let mut sibling = if self.is_leaf {
            Node::new_leaf(self.order)
        } else {
            Node::new_internal(self.order)
        };

        sibling.keys.extend(self.keys.drain(mid + 1..));
        if !self.is_leaf {
            sibling.children.extend(self.children.drain(mid + 1..));
        }
        let median = self.keys.remove(mid);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            leaf = self.is_leaf,
            left_keys = self.keys.len(),
            right_keys = sibling.keys.len(),
            "node split"
        );

        InsertResult::Split {
            median,
            sibling: Box::new(sibling),
        }
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Remove one copy of `key` from this subtree.
    ///
    /// Returns true if a key was removed. An absent key leaves the subtree
    /// untouched. This node itself may be left underfull; repairing it is the
    /// caller's job.
    pub(crate) fn erase(&mut self, key: &K) -> bool {
        let index = self.lower_bound(key);
        let found = self.keys.get(index) == Some(key);

        if self.is_leaf {
            if found {
                self.keys.remove(index);
            }
            return found;
        }

        let removed = if found {
            // Internal keys are replaced by their in-order predecessor
            match self.children[index].pop_max() {
                Some(predecessor) => {
                    self.keys[index] = predecessor;
                    true
                }
                None => false,
            }
        } else {
            self.children[index].erase(key)
        };

        if removed {
            self.refill(index);
        }
        removed
    }

    /// Remove and return the largest key of this subtree.
    pub(crate) fn pop_max(&mut self) -> Option<K> {
        if self.is_leaf {
            return self.keys.pop();
        }
        let last = self.children.len() - 1;
        let max = self.children[last].pop_max();
        self.refill(last);
        max
    }

    /// Remove and return the smallest key of this subtree.
    pub(crate) fn pop_min(&mut self) -> Option<K> {
        if self.is_leaf {
            if self.keys.is_empty() {
                return None;
            }
            return Some(self.keys.remove(0));
        }
        let min = self.children[0].pop_min();
        self.refill(0);
        min
    }

    // ============================================================================
    // REBALANCING
    // ============================================================================

    /// Restore minimum occupancy of the child at `slot` after a removal below it.
    ///
    /// Borrows from the left sibling first, then the right one, and merges with
    /// a sibling when neither can spare a key. A merge removes a key from this
    /// node, which may leave this node underfull in turn.
    pub(crate) fn refill(&mut self, slot: usize) {
        if self.children.len() < 2 || !self.children[slot].is_underfull() {
            return;
        }

        if slot > 0 && self.children[slot - 1].can_donate() {
            self.rotate_right(slot - 1);
        } else if slot + 1 < self.children.len() && self.children[slot + 1].can_donate() {
            self.rotate_left(slot);
        } else if slot + 1 == self.children.len() {
            self.merge_children(slot - 1);
        } else {
            self.merge_children(slot);
        }
    }

    /// Move one key from the left child of `separator` through the parent into
    /// the right child. For internal children the left child's last subtree
    /// moves along with it.
    fn rotate_right(&mut self, separator: usize) {
        let (left_half, right_half) = self.children.split_at_mut(separator + 1);
        let left = &mut left_half[separator];
        let right = &mut right_half[0];

        let Some(moved_key) = left.keys.pop() else {
            return;
        };
        let parent_key = std::mem::replace(&mut self.keys[separator], moved_key);
        right.keys.insert(0, parent_key);
        if let Some(moved_child) = left.children.pop() {
            right.children.insert(0, moved_child);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(separator, leaf = right.is_leaf, "borrowed from left sibling");
    }

    /// Move one key from the right child of `separator` through the parent into
    /// the left child. For internal children the right child's first subtree
    /// moves along with it.
    fn rotate_left(&mut self, separator: usize) {
        let (left_half, right_half) = self.children.split_at_mut(separator + 1);
        let left = &mut left_half[separator];
        let right = &mut right_half[0];

        if right.keys.is_empty() {
            return;
        }
        let moved_key = right.keys.remove(0);
        let parent_key = std::mem::replace(&mut self.keys[separator], moved_key);
        left.keys.push(parent_key);
        if !right.is_leaf {
            left.children.push(right.children.remove(0));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(separator, leaf = left.is_leaf, "borrowed from right sibling");
    }

    /// Merge the right child of `separator` and the separator key itself into
    /// the left child, removing both from this node.
    fn merge_children(&mut self, separator: usize) {
        let parent_key = self.keys.remove(separator);
        let mut donor = self.children.remove(separator + 1);
        let absorber = &mut self.children[separator];

        absorber.keys.push(parent_key);
        absorber.keys.append(&mut donor.keys);
        absorber.children.append(&mut donor.children);

        debug_assert!(
            absorber.keys.len() <= absorber.max_keys(),
            "merge produced {} keys with order {}",
            absorber.keys.len(),
            absorber.order
        );

        #[cfg(feature = "tracing")]
        tracing::trace!(
            separator,
            merged_keys = absorber.keys.len(),
            parent_keys = self.keys.len(),
            "merged siblings"
        );
    }
}
