use thiserror::Error;

/// Error types for `DynamicArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is not in `[0, length)`
    #[error("Index out of range: index {index} is beyond array length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Element-wise operation on arrays of different lengths
    #[error("Array lengths must be equal: {left} != {right}")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },
    /// The requested storage could not be obtained
    #[error("Allocation failed: cannot allocate {requested} slots")]
    AllocationError {
        /// Number of slots requested
        requested: usize,
    },
    /// Checked removal from an empty array
    #[error("Operation on empty array")]
    EmptyArray,
}
