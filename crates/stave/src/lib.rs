//! A growable, contiguous, index-addressable sequence container with manual
//! control over its backing storage.
//!
//! [`Stave`] layers a logical length over an exclusively-owned, fixed-length
//! buffer and implements all growth, insertion, removal, and comparison
//! semantics on top of it:
//!
//! ```text
//! Stave<T> (length bookkeeping, growth policy, positional ops, comparisons)
//! └── OwnedBuf<T> (stave-buf: exclusive-ownership fixed-length block)
//! ```
//!
//! # Storage discipline
//!
//! Every operation that needs more storage builds a complete replacement
//! buffer first, moves the live elements across, and swaps it in. An
//! allocation failure therefore leaves the container exactly as it was —
//! valid, untouched, and still owning its previous buffer.
//!
//! Growth on [`Stave::push`] and [`Stave::insert`] doubles the capacity
//! (starting at 1); [`Stave::resize`] and [`Stave::reserve`] allocate the
//! exact requested length with no headroom. Removal compacts in place and
//! never reallocates.
//!
//! # Errors
//!
//! All allocating operations are fallible and surface
//! [`StaveError::AllocationFailed`] instead of aborting. Checked access via
//! [`Stave::at`] surfaces [`StaveError::IndexOutOfRange`]; indexing with
//! `container[i]` is the unchecked counterpart whose bounds are the caller's
//! contract.
//!
//! # Example
//!
//! ```
//! use stave::Stave;
//!
//! # fn main() -> Result<(), stave::StaveError> {
//! let mut seq = Stave::new();
//! seq.push(5)?;
//! seq.push(7)?;
//! seq.insert(1, 6)?;
//! assert_eq!(seq.as_slice(), &[5, 6, 7]);
//! seq.remove(0)?;
//! assert_eq!(seq.as_slice(), &[6, 7]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hint;
pub mod iter;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::StaveError;
pub use hint::CapacityHint;
pub use iter::IntoIter;
pub use vec::Stave;
