//! The growable, contiguous sequence container.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use stave_buf::OwnedBuf;

use crate::error::StaveError;
use crate::hint::CapacityHint;
use crate::iter::IntoIter;

/// A growable, contiguous, index-addressable sequence of `T`.
///
/// The container owns exactly one [`OwnedBuf`] and tracks how many of its
/// slots are logically live. Capacity is the buffer's real allocated length;
/// it is never recorded separately, so it cannot drift out of sync with the
/// allocation.
///
/// Elements at `[0, len)` are live values. Slots at `[len, capacity)` hold
/// default-constructed or previously-vacated values whose content is
/// unspecified; they are never observable through the public API.
///
/// All reallocating operations are fallible: on
/// [`StaveError::AllocationFailed`] the container is left untouched, still
/// owning its previous buffer with all live elements intact.
pub struct Stave<T> {
    buf: OwnedBuf<T>,
    len: usize,
}

impl<T> Stave<T> {
    /// Create an empty container. No allocation.
    pub fn new() -> Self {
        Self {
            buf: OwnedBuf::empty(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of element slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements as a shared slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Reference to the first live element, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Reference to the last live element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Checked access: the element at `index`, or
    /// [`StaveError::IndexOutOfRange`] if `index >= len`.
    ///
    /// Valid in every container state, including empty. The container is
    /// never modified by a failed lookup.
    pub fn at(&self, index: usize) -> Result<&T, StaveError> {
        if index < self.len {
            Ok(&self.buf[index])
        } else {
            Err(StaveError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Checked mutable access; see [`Stave::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, StaveError> {
        if index < self.len {
            Ok(&mut self.buf[index])
        } else {
            Err(StaveError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Drop the last live element's slot from the live range.
    ///
    /// O(1); no-op when empty. The vacated slot keeps its prior value —
    /// nothing is destroyed until the buffer itself is replaced or dropped.
    pub fn pop(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Reset the live range to zero. Buffer and capacity are retained for
    /// reuse.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrink-only resize: no-op when `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchange buffer and length with another container in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Iterator over shared references to the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterator over mutable references to the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Default> Stave<T> {
    /// Create an empty container whose buffer is pre-sized per `hint`.
    ///
    /// Length stays 0; the hint is consumed once and never revisited.
    pub fn with_hint(hint: CapacityHint) -> Result<Self, StaveError> {
        Self::with_capacity(hint.get())
    }

    /// Create an empty container with capacity for exactly `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, StaveError> {
        Ok(Self {
            buf: OwnedBuf::new(capacity)?,
            len: 0,
        })
    }

    /// Create a container of `len` default-valued live elements.
    ///
    /// Length and capacity both equal `len`.
    pub fn with_len(len: usize) -> Result<Self, StaveError> {
        Ok(Self {
            buf: OwnedBuf::new(len)?,
            len,
        })
    }

    /// Create a container of `len` live elements, every slot set to `value`.
    ///
    /// The fill is unconditional — there is no "is this the default?"
    /// special case.
    pub fn filled(len: usize, value: T) -> Result<Self, StaveError>
    where
        T: Clone,
    {
        let mut buf = OwnedBuf::new(len)?;
        buf.as_mut_slice().fill(value);
        Ok(Self { buf, len })
    }

    /// Create a container holding a clone of `src`.
    ///
    /// The buffer is sized exactly to `src.len()`: copying never preserves a
    /// source container's spare capacity, only its logical length.
    pub fn from_slice(src: &[T]) -> Result<Self, StaveError>
    where
        T: Clone,
    {
        let mut buf = OwnedBuf::new(src.len())?;
        buf.as_mut_slice().clone_from_slice(src);
        Ok(Self {
            buf,
            len: src.len(),
        })
    }

    /// Fallible deep copy: equal (`==`) to `self`, independently mutable.
    pub fn try_clone(&self) -> Result<Self, StaveError>
    where
        T: Clone,
    {
        Self::from_slice(self.as_slice())
    }

    /// Append `value`. Amortized O(1).
    ///
    /// When the buffer is full, capacity doubles (starting at 1): a new
    /// buffer is built, live elements move across, and only then is it
    /// swapped in. On allocation failure the container is unmodified.
    pub fn push(&mut self, value: T) -> Result<(), StaveError> {
        if self.len == self.capacity() {
            self.regrow(self.grown_capacity())?;
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Set the live length to `new_len`.
    ///
    /// Shrinking only moves the length marker: capacity is retained, and the
    /// former live elements past `new_len` become unspecified excess slots.
    /// Growing reallocates to *exactly* `new_len` (no doubling headroom),
    /// moves the live elements across, and default-fills the new slots;
    /// length and capacity both become `new_len`.
    ///
    /// Shrink-then-regrow is not value-preserving: regrowth reallocates, so
    /// slots past the shrunken length come back default-valued.
    pub fn resize(&mut self, new_len: usize) -> Result<(), StaveError> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        self.regrow(new_len)?;
        self.len = new_len;
        Ok(())
    }

    /// Ensure capacity for at least `new_capacity` elements.
    ///
    /// No-op when `new_capacity <= capacity`; otherwise reallocates to
    /// exactly `new_capacity`, preserving the length and all live elements.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), StaveError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.regrow(new_capacity)
    }

    /// Insert `value` at `index`, shifting the tail `[index, len)` right.
    ///
    /// `index` may equal `len`, in which case this appends. On an empty
    /// container it degenerates to [`Stave::push`]. The buffer grows
    /// (doubling) only when full; otherwise the shift happens in place.
    /// Returns the inserted element's index.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, StaveError> {
        if index > self.len {
            return Err(StaveError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.capacity() {
            self.regrow(self.grown_capacity())?;
        }
        // Open the gap by walking the tail right one slot. The vacated slot
        // at `len` absorbs the shifted values; its prior content ends up at
        // `index` and is overwritten below.
        let slots = self.buf.as_mut_slice();
        for i in (index..self.len).rev() {
            slots.swap(i, i + 1);
        }
        self.buf[index] = value;
        self.len += 1;
        Ok(index)
    }

    /// Remove the element at `index`, shifting the tail left in place.
    ///
    /// Never reallocates; capacity is unchanged. Returns the index now
    /// holding the element that followed the removed one (the same logical
    /// slot in the compacted sequence).
    pub fn remove(&mut self, index: usize) -> Result<usize, StaveError> {
        if index >= self.len {
            return Err(StaveError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let slots = self.buf.as_mut_slice();
        for i in index..self.len - 1 {
            slots.swap(i, i + 1);
        }
        // The removed value now sits in the excess slot at len - 1.
        self.len -= 1;
        Ok(index)
    }

    /// Next capacity on the doubling curve: 1, 2, 4, 8, …
    fn grown_capacity(&self) -> usize {
        self.capacity().saturating_mul(2).max(1)
    }

    /// Replace the buffer with a fresh block of `new_capacity` slots, moving
    /// the live elements across.
    ///
    /// The replacement is fully built before the swap, so a failed
    /// allocation leaves `self` untouched.
    fn regrow(&mut self, new_capacity: usize) -> Result<(), StaveError> {
        debug_assert!(new_capacity >= self.len);
        let mut next = OwnedBuf::new(new_capacity)?;
        let live = self.len;
        next.as_mut_slice()[..live].swap_with_slice(&mut self.buf.as_mut_slice()[..live]);
        self.buf.swap(&mut next);
        Ok(())
    }
}

impl<T> Default for Stave<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Stave<T> {
    type Output = T;

    /// Unchecked access: the caller asserts `index < len`.
    ///
    /// Violations trip a `debug_assert!` in debug builds; release builds
    /// perform no length check of their own.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of live range (len {})",
            self.len
        );
        &self.buf[index]
    }
}

impl<T> IndexMut<usize> for Stave<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of live range (len {})",
            self.len
        );
        &mut self.buf[index]
    }
}

impl<T: Clone + Default> Clone for Stave<T> {
    /// Deep copy.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails; use [`Stave::try_clone`] for the fallible
    /// path.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("stave clone failed: {err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stave<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stave").field(&self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stave<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Stave<T> {}

impl<T: PartialOrd> PartialOrd for Stave<T> {
    /// Lexicographic over the live elements; spare capacity never
    /// participates.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Stave<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Stave<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Default> FromIterator<T> for Stave<T> {
    /// Collect into a container.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails; push elements through [`Stave::push`] for
    /// the fallible path.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Stave::new();
        seq.extend(iter);
        seq
    }
}

impl<T: Default> Extend<T> for Stave<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push(value) {
                panic!("stave extend failed: {err}");
            }
        }
    }
}

impl<T: Default, const N: usize> From<[T; N]> for Stave<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Stave<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Stave<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Default> IntoIterator for Stave<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buf, self.len)
    }
}

/// Element-list construction, in the style of `vec!`.
///
/// `stave![a, b, c]` collects the listed elements; `stave![x; n]` builds `n`
/// clones of `x`. Both panic on allocation failure — use the fallible
/// constructors directly where that matters.
#[macro_export]
macro_rules! stave {
    () => {
        $crate::Stave::new()
    };
    ($value:expr; $n:expr) => {
        match $crate::Stave::filled($n, $value) {
            Ok(seq) => seq,
            Err(err) => panic!("stave construction failed: {err}"),
        }
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::Stave<_> as ::core::iter::FromIterator<_>>::from_iter([$($value),+])
    };
}
