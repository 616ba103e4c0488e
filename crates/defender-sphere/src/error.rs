//! Error type shared by the grid, the nearest-cell query and the planet context.

use thiserror::Error;

/// Errors returned by sphere-grid operations.
///
/// Every variant indicates a caller programming error; none of them is
/// transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// An argument was outside its valid domain (negative cell count,
    /// zero-length query vector, non-positive radius, empty grid).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A cell index was outside `[0, size)`.
    #[error("cell index {index} out of range for grid of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The grid's cell count.
        size: usize,
    },
}

impl GridError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
