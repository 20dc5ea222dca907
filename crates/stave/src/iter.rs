//! By-value iteration over a consumed container.

use stave_buf::OwnedBuf;

/// Draining by-value iterator returned by `Stave::into_iter`.
///
/// Takes ownership of the container's buffer and moves elements out
/// front-to-back, leaving default values in the vacated slots. The buffer is
/// released when the iterator drops.
pub struct IntoIter<T> {
    buf: OwnedBuf<T>,
    len: usize,
    pos: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: OwnedBuf<T>, len: usize) -> Self {
        Self { buf, len, pos: 0 }
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos < self.len {
            let item = std::mem::take(&mut self.buf[self.pos]);
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}
