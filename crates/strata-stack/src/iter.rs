//! Iteration over a chunked stack.

use std::iter::{FusedIterator, Flatten};
use std::slice;

use crate::chunk::Chunk;

/// Order in which [`ChunkedStack::stream`](crate::ChunkedStack::stream)
/// visits elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Bottom (oldest) to top.
    #[default]
    Forward,
    /// Top to bottom, i.e. pop order.
    Backward,
}

/// Borrowing iterator over a [`ChunkedStack`](crate::ChunkedStack), bottom
/// to top. Reversible.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: Flatten<slice::Iter<'a, Chunk<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(chain: &'a [Chunk<T>], len: usize) -> Self {
        Self {
            inner: chain.iter().flatten(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.inner.next()?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.inner.next_back()?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
