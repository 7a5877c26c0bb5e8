//! Error types for [`DynamicArray`](crate::DynamicArray) operations.
//!
//! Every precondition is checked before the buffer is touched, so an `Err` always leaves
//! the array exactly as it was before the call.

use thiserror::Error;

/// Broad classification of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A position, index or capacity argument lies outside its legal range.
    InvalidArgument,
    /// The array is in a mode that forbids the requested operation.
    InvalidState,
}

/// Error type for array operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Insert position outside `0..=len`.
    #[error("position out of range: {position} not in 0..={len}")]
    PositionOutOfRange { position: usize, len: usize },

    /// Remove index outside `0..len`.
    #[error("index out of range: {index} not in 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Fixed arrays only accept positions strictly below their capacity.
    #[error("position {position} is beyond fixed capacity {capacity}")]
    BeyondFixedCapacity { position: usize, capacity: usize },

    /// Capacity-based construction requires at least one slot.
    #[error("capacity must be at least 1, got {capacity}")]
    InvalidCapacity { capacity: usize },

    /// Explicit capacity cannot hold the supplied initial values.
    #[error("capacity {capacity} is smaller than the {required} initial values")]
    CapacityTooSmall { capacity: usize, required: usize },

    /// Growth or shrink parameters that would break the amortized policy.
    #[error("invalid capacity policy: {0}")]
    InvalidPolicy(String),

    /// Sorted-only operation on an array whose order is not guaranteed.
    #[error("cannot use {operation} on unsorted array")]
    NotSorted { operation: &'static str },

    /// Capacity-changing operation on a fixed-capacity array.
    #[error("cannot use {operation} on fixed-capacity array")]
    FixedCapacity { operation: &'static str },
}

impl ArrayError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::PositionOutOfRange { .. }
            | ArrayError::IndexOutOfRange { .. }
            | ArrayError::BeyondFixedCapacity { .. }
            | ArrayError::InvalidCapacity { .. }
            | ArrayError::CapacityTooSmall { .. }
            | ArrayError::InvalidPolicy(_) => ErrorKind::InvalidArgument,
            ArrayError::NotSorted { .. } | ArrayError::FixedCapacity { .. } => {
                ErrorKind::InvalidState
            }
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ArrayError>;
