//! Bounded-capacity blocks making up a chunked stack.

use std::slice;

/// One link of the bucket chain: a block that holds at most `capacity`
/// elements and never reallocates.
#[derive(Debug)]
pub(crate) struct Chunk<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Chunk<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adopt an existing vector; its spare capacity becomes free slots.
    pub(crate) fn adopt(data: Vec<T>) -> Self {
        let capacity = data.capacity().max(data.len());
        Self { data, capacity }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    pub(crate) fn push(&mut self, value: T) -> &mut T {
        let slot = self.data.len();
        self.data.push(value);
        &mut self.data[slot]
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Clone> Clone for Chunk<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.data.iter()
    }
}
