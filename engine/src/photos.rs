//! Photo sequence seen by the clock
//!
//! The engine only needs a length; the application also looks up the handle
//! at the current index to draw it.

/// An ordered, read-only set of image handles
pub trait PhotoSequence {
    type Handle;

    fn photo_count(&self) -> usize;

    fn photo(&self, index: usize) -> Option<&Self::Handle>;
}

impl<T> PhotoSequence for [T] {
    type Handle = T;

    fn photo_count(&self) -> usize {
        self.len()
    }

    fn photo(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> PhotoSequence for Vec<T> {
    type Handle = T;

    fn photo_count(&self) -> usize {
        self.len()
    }

    fn photo(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}
