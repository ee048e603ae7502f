//! Fixed-capacity element blocks.
//!
//! A [`Bucket`] is the allocation unit of a bucketed array. It is created
//! with room for exactly `capacity` elements and never reallocates: the
//! array moves on to a fresh bucket instead of growing an existing one.

/// A single contiguous block of at most `capacity` elements.
#[derive(Debug)]
pub(crate) struct Bucket<T> {
    /// Live elements. `data.capacity() >= capacity` from construction on.
    data: Vec<T>,
    /// Slot count this bucket was sized for.
    capacity: usize,
}

impl<T> Bucket<T> {
    /// Allocate an empty bucket with room for `capacity` elements.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adopt `data` as a bucket of the given capacity, reserving the
    /// missing slots.
    pub(crate) fn adopt(mut data: Vec<T>, capacity: usize) -> Self {
        debug_assert!(data.len() <= capacity);
        data.reserve_exact(capacity - data.len());
        Self { data, capacity }
    }

    /// Append into the next free slot and return it.
    ///
    /// The caller guarantees the bucket is not full.
    pub(crate) fn push(&mut self, value: T) -> &mut T {
        debug_assert!(!self.is_full(), "push into a full bucket");
        let slot = self.data.len();
        self.data.push(value);
        &mut self.data[slot]
    }

    /// Remove the last occupied slot, leaving it vacant.
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        self.data.get(offset)
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.data.get_mut(offset)
    }

    /// Occupied slots as a slice.
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }
}

impl<T: Clone> Clone for Bucket<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}
