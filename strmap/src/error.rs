use thiserror::Error;

/// Error types for `StrMap` construction
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrMapError {
    /// A table with zero buckets was requested
    #[error("Invalid bucket count: a table needs at least 1 bucket")]
    ZeroBuckets,

    /// The bucket array could not be allocated
    #[error("Allocation failed: could not reserve {buckets} bucket slots")]
    AllocationFailed {
        /// Number of bucket slots that was requested
        buckets: usize,
    },
}
