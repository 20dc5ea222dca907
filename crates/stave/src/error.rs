//! Container-specific error types.

use std::error::Error;
use std::fmt;

use stave_buf::AllocError;

/// Errors that can occur during container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaveError {
    /// The system could not provide memory for a requested buffer length.
    ///
    /// The container that triggered the allocation is left unmodified and
    /// still owns its previous buffer.
    AllocationFailed {
        /// Number of bytes requested from the allocator.
        requested: usize,
    },
    /// Checked access or positional mutation with an index past the live
    /// range. The container is left unmodified.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
}

impl fmt::Display for StaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for StaveError {}

impl From<AllocError> for StaveError {
    fn from(err: AllocError) -> Self {
        Self::AllocationFailed {
            requested: err.requested,
        }
    }
}
