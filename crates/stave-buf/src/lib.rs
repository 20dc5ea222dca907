//! Exclusive-ownership fixed-length buffer for the stave container.
//!
//! This is the leaf crate of the workspace. [`OwnedBuf`] owns zero or one
//! heap-allocated block of default-constructed elements; the `stave` crate
//! layers size/capacity bookkeeping and growth policy on top of it. Nothing
//! here knows about logical length — the buffer's length *is* its allocation.
//!
//! Allocation is fallible: [`OwnedBuf::new`] surfaces [`AllocError`] instead
//! of aborting the process, so callers can keep their prior storage intact
//! when the system is out of memory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

/// The system could not provide memory for a requested buffer length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// Number of bytes requested from the allocator.
    pub requested: usize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer allocation failed: requested {} bytes",
            self.requested
        )
    }
}

impl Error for AllocError {}

/// A move-only, exclusively-owned block of default-constructed elements.
///
/// At most one `OwnedBuf` ever references a given heap block. Ownership
/// travels with the value — there is no `Clone`; an independent copy is
/// always an explicit new allocation at the container level. A zero-length
/// buffer is the canonical empty state and holds no allocation.
///
/// Indexed access performs no logical-bounds policing of its own: the caller
/// (the container) guarantees index validity against its own length.
pub struct OwnedBuf<T> {
    data: Box<[T]>,
}

impl<T> OwnedBuf<T> {
    /// The empty state: zero length, no allocation. Never fails.
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// Allocate a block of `len` default-constructed elements.
    ///
    /// `len == 0` produces the empty state without touching the allocator.
    /// On allocation failure the error carries the requested byte count and
    /// nothing has been allocated.
    pub fn new(len: usize) -> Result<Self, AllocError>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(Self::empty());
        }
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| AllocError {
            requested: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
        data.resize_with(len, T::default);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Length of the owned block in elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this buffer is in the empty state.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the whole block as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the whole block as a mutable slice.
    ///
    /// Used by the container for bulk element moves during reallocation.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Exchange the owned blocks of two buffers.
    ///
    /// Constant time, no allocation, cannot fail. This is the primitive the
    /// container uses to atomically adopt a freshly built replacement block.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for OwnedBuf<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuf<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> fmt::Debug for OwnedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnedBuf(len={})", self.data.len())
    }
}
