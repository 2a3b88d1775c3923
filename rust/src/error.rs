//! Error handling and result types for BTree operations.
//!
//! The core operations are total, so errors only surface from construction,
//! the strict removal entry point, and structural validation.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Invalid order specified at construction.
    InvalidOrder(String),
    /// A structural invariant does not hold.
    CorruptedTree(String),
}

impl BTreeError {
    /// Create an InvalidOrder error with context
    pub fn invalid_order(order: usize, min_required: usize) -> Self {
        Self::InvalidOrder(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is an order error
    pub fn is_order_error(&self) -> bool {
        matches!(self, Self::InvalidOrder(_))
    }

    /// Check if this error reports a broken invariant
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptedTree(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            BTreeError::InvalidOrder(msg) => write!(f, "Invalid order: {}", msg),
            BTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, BTreeError>;

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;
