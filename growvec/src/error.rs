use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// The allocator could not provide the requested block
    #[error("Allocation failed: could not obtain {bytes} bytes")]
    AllocationFailed {
        /// Size of the block that was requested, in bytes
        bytes: usize,
    },
    /// Capacity arithmetic or the allocation layout would overflow
    #[error("Capacity overflow: cannot grow to {requested} elements")]
    CapacityOverflow {
        /// Capacity that was requested, in elements
        requested: usize,
    },
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// A capacity of zero elements was requested
    #[error("Invalid capacity: capacity must be at least 1")]
    ZeroCapacity,
    /// The element type has a size of zero bytes
    #[error("Invalid element type: zero-sized elements are not supported")]
    ZeroSizeElement,
}
