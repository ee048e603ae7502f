//! The indexable storage capability shared by the containers.

use crate::error::ContainerError;

/// An ordered, indexable, growable sequence of `T`.
///
/// Implemented by `BucketedArray` and `ChunkedStack` (and by `Vec<T>`
/// as a baseline). The heap and the sort adapter are written against this
/// trait only, so either chunked container can back them.
///
/// Index `0` is the oldest element and `len() - 1` the most recently
/// pushed one. References handed out by `push`, `get` and `get_mut` are
/// borrows of the storage and end at the next mutation.
pub trait Storage<T> {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether the storage holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `value` and return a reference to the stored copy.
    fn push(&mut self, value: T) -> &mut T;

    /// Shared reference to the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&T>;

    /// Mutable reference to the element at `index`, or `None` past the end.
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Remove and return the last element.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when empty.
    fn pop(&mut self) -> Result<T, ContainerError>;

    /// Exchange the contents of the slots at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below `len()`.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Storage<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push(&mut self, value: T) -> &mut T {
        let index = Vec::len(self);
        Vec::push(self, value);
        &mut self[index]
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        Vec::pop(self).ok_or(ContainerError::out_of_bounds(0, 0))
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}
