//! Error types for container operations.

use std::error::Error;
use std::fmt;

/// Errors returned by container operations that address a position
/// outside the live range.
///
/// Reads that merely probe for existence (`get` on a bucketed array,
/// lookups in a sparse set, heap search) return `Option` instead; this
/// type is reserved for operations where an invalid index is a logic
/// error on the caller's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// The requested index is not below the current length.
    OutOfBounds {
        /// Length of the container at the time of the call.
        len: usize,
        /// The index that was requested.
        index: usize,
    },
}

impl ContainerError {
    /// Shorthand for [`ContainerError::OutOfBounds`].
    pub fn out_of_bounds(len: usize, index: usize) -> Self {
        Self::OutOfBounds { len, index }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { len: 0, .. } => write!(f, "index out of bounds: is empty"),
            Self::OutOfBounds { len, index } => write!(
                f,
                "index out of bounds: requested {index} element with {len} length"
            ),
        }
    }
}

impl Error for ContainerError {}
