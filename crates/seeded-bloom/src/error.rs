//! Error types for the seeded Bloom filter

use thiserror::Error;

/// Errors that can occur while constructing a filter
///
/// Every operation on a constructed filter is total; only construction
/// can fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The seed array or the bit store could not be reserved.
    ///
    /// `requested` is in bytes and saturates at `usize::MAX` when the size
    /// itself overflows.
    #[error("Allocation failure: could not reserve {requested} bytes for {resource}")]
    AllocationFailure {
        resource: &'static str,
        requested: usize,
    },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}

impl FilterError {
    pub(crate) fn allocation<T>(resource: &'static str, count: usize) -> Self {
        Self::AllocationFailure {
            resource,
            requested: count.saturating_mul(std::mem::size_of::<T>()),
        }
    }
}
