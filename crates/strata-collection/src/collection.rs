//! The bucketed dynamic array.

use std::fmt;
use std::ops::{Index, IndexMut};

use strata_core::{stream, CancelToken, ChannelIter, ContainerError, Storage};

use crate::bucket::Bucket;
use crate::config::BucketConfig;
use crate::iter::{Fetcher, Iter};

/// A growable array made of fixed-capacity buckets.
///
/// Appending never moves existing elements: when the last bucket is full
/// a new one is allocated next to it. The element at logical index `i`
/// lives in bucket `i / bucket_size` at offset `i % bucket_size`, and every
/// bucket except the last populated one is full.
///
/// # Deletion reorders
///
/// [`delete`](Self::delete) is a swap-delete: the removed slot is refilled
/// with the current last element, so removal is O(1) but insertion order
/// is not preserved. When removing several indices, remove them in
/// strictly decreasing order; removing in increasing order makes later
/// indices refer to moved elements.
///
/// # References
///
/// References returned by [`push`](Self::push), [`get`](Self::get) and
/// friends borrow the array and therefore end at the next structural
/// mutation.
#[derive(Clone)]
pub struct BucketedArray<T> {
    len: usize,
    bucket_size: usize,
    release_empty_buckets: bool,
    buckets: Vec<Bucket<T>>,
}

impl<T> BucketedArray<T> {
    /// Create an empty array with the given bucket size (0 selects the
    /// default of 1000).
    pub fn new(bucket_size: usize) -> Self {
        Self::with_config(BucketConfig::new(bucket_size))
    }

    /// Create an empty array from a full configuration.
    pub fn with_config(config: BucketConfig) -> Self {
        Self {
            len: 0,
            bucket_size: config.effective_bucket_size(),
            release_empty_buckets: config.release_empty_buckets,
            buckets: Vec::new(),
        }
    }

    /// Build an array holding `values` in order.
    ///
    /// An input that fits in a single bucket is adopted as that bucket
    /// (its allocation is reused and padded to the bucket size); longer
    /// inputs are moved into buckets chunk by chunk.
    pub fn from_vec(values: Vec<T>, bucket_size: usize) -> Self {
        let mut array = Self::new(bucket_size);
        if values.len() <= array.bucket_size {
            if !values.is_empty() {
                array.len = values.len();
                array.buckets.push(Bucket::adopt(values, array.bucket_size));
            }
            return array;
        }
        array
            .buckets
            .reserve(values.len().div_ceil(array.bucket_size));
        array.extend(values);
        array
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots per bucket.
    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    /// Number of allocated buckets, including emptied ones not yet pruned.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total slots across allocated buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len() * self.bucket_size
    }

    fn locate(&self, index: usize) -> (usize, usize) {
        (index / self.bucket_size, index % self.bucket_size)
    }

    /// Append `value` and return a reference to the stored element.
    ///
    /// Amortised O(1); allocates a new bucket only when the last one is
    /// full.
    pub fn push(&mut self, value: T) -> &mut T {
        let (bucket, _) = self.locate(self.len);
        if bucket == self.buckets.len() {
            self.buckets.push(Bucket::new(self.bucket_size));
        }
        self.len += 1;
        self.buckets[bucket].push(value)
    }

    /// Reference to the element at `index`, or `None` when
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (bucket, offset) = self.locate(index);
        self.buckets.get(bucket)?.get(offset)
    }

    /// Mutable reference to the element at `index`, or `None` when
    /// `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (bucket, offset) = self.locate(index);
        self.buckets.get_mut(bucket)?.get_mut(offset)
    }

    /// Remove the element at `index` and return it.
    ///
    /// Unless `index` is the last position, the last element is moved into
    /// the vacated slot. See the type-level docs for the ordering contract
    /// this implies for batch removal.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::out_of_bounds(self.len, index));
        }
        let last = self.pop()?;
        if index == self.len {
            return Ok(last);
        }
        let (bucket, offset) = self.locate(index);
        let slot = self.buckets[bucket]
            .get_mut(offset)
            .ok_or(ContainerError::out_of_bounds(self.len, index))?;
        Ok(std::mem::replace(slot, last))
    }

    /// Remove and return the last element.
    ///
    /// The vacated slot is released immediately. The bucket it belonged to
    /// stays allocated unless the array was configured with
    /// `release_empty_buckets`.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when empty.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::out_of_bounds(0, 0));
        }
        let (bucket, _) = self.locate(self.len - 1);
        let value = self.buckets[bucket]
            .pop()
            .ok_or(ContainerError::out_of_bounds(self.len, self.len - 1))?;
        self.len -= 1;
        if self.release_empty_buckets && self.buckets[bucket].is_empty() {
            self.buckets.truncate(bucket);
        }
        Ok(value)
    }

    /// Release every bucket beyond `ceil(len / bucket_size)`.
    ///
    /// Live elements keep their indices.
    pub fn prune(&mut self) {
        let keep = self.len.div_ceil(self.bucket_size);
        self.buckets.truncate(keep);
        self.buckets.shrink_to_fit();
    }

    /// Call `callback` on every element in index order until it returns
    /// `false`.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&T) -> bool,
    {
        for bucket in &self.buckets {
            for value in bucket.as_slice() {
                if !callback(value) {
                    return;
                }
            }
        }
    }

    /// Like [`each`](Self::each) with mutable access.
    pub fn each_mut<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        for bucket in &mut self.buckets {
            for value in bucket.as_mut_slice() {
                if !callback(value) {
                    return;
                }
            }
        }
    }

    /// Borrowing iterator in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buckets, self.len)
    }

    /// Cursor over the elements in index order.
    pub fn fetcher(&self) -> Fetcher<'_, T> {
        Fetcher::new(self.iter())
    }

    /// Walk the array on a producer thread and consume the elements
    /// through a bounded channel of `capacity` slots.
    ///
    /// The producer stops early once `cancel` fires or `consume` drops its
    /// iterator. The array cannot be mutated while the stream runs.
    pub fn stream<'a, C, R>(&'a self, capacity: usize, cancel: &CancelToken, consume: C) -> R
    where
        T: Sync,
        C: for<'s> FnOnce(ChannelIter<'s, &'a T>) -> R,
    {
        stream(
            capacity,
            cancel,
            move |emitter| {
                for value in self.iter() {
                    if !emitter.emit(value) {
                        return;
                    }
                }
            },
            consume,
        )
    }

    /// Exchange the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below `len()`.
    pub fn swap(&mut self, a: usize, b: usize) {
        assert!(
            a < self.len && b < self.len,
            "swap indices ({a}, {b}) out of bounds for length {}",
            self.len
        );
        let (ba, oa) = self.locate(a);
        let (bb, ob) = self.locate(b);
        if ba == bb {
            self.buckets[ba].as_mut_slice().swap(oa, ob);
            return;
        }
        let (lo, lo_off, hi, hi_off) = if ba < bb {
            (ba, oa, bb, ob)
        } else {
            (bb, ob, ba, oa)
        };
        let (head, tail) = self.buckets.split_at_mut(hi);
        std::mem::swap(
            &mut head[lo].as_mut_slice()[lo_off],
            &mut tail[0].as_mut_slice()[hi_off],
        );
    }
}

impl<T> Default for BucketedArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: fmt::Debug> fmt::Debug for BucketedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for BucketedArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for BucketedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a BucketedArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Index<usize> for BucketedArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("{}", ContainerError::out_of_bounds(self.len, index)),
        }
    }
}

impl<T> IndexMut<usize> for BucketedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", ContainerError::out_of_bounds(len, index)),
        }
    }
}

impl<T> Storage<T> for BucketedArray<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, value: T) -> &mut T {
        BucketedArray::push(self, value)
    }

    fn get(&self, index: usize) -> Option<&T> {
        BucketedArray::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        BucketedArray::get_mut(self, index)
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        BucketedArray::pop(self)
    }

    fn swap(&mut self, a: usize, b: usize) {
        BucketedArray::swap(self, a, b);
    }
}
