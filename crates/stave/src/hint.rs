//! Capacity-reservation hint.

/// A one-time capacity request consumed by [`Stave::with_hint`].
///
/// The hint pre-sizes the backing buffer without changing the container's
/// length. It is immutable after creation.
///
/// [`Stave::with_hint`]: crate::Stave::with_hint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct CapacityHint {
    slots: usize,
}

impl CapacityHint {
    /// Request capacity for `slots` elements.
    pub fn new(slots: usize) -> Self {
        Self { slots }
    }

    /// The requested number of element slots.
    pub fn get(&self) -> usize {
        self.slots
    }
}
