//! Borrowing traversal of a bucketed array.

use std::iter::FusedIterator;
use std::slice;

use crate::bucket::Bucket;

/// Iterator over a [`BucketedArray`](crate::BucketedArray) in index order.
pub struct Iter<'a, T> {
    buckets: slice::Iter<'a, Bucket<T>>,
    current: slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buckets: &'a [Bucket<T>], len: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            current: Default::default(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            if self.remaining == 0 {
                return None;
            }
            self.current = self.buckets.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Cursor over a [`BucketedArray`](crate::BucketedArray).
///
/// Call [`advance`](Self::advance) to move to the next element, then
/// [`fetch`](Self::fetch) to read it:
///
/// ```
/// use strata_collection::BucketedArray;
///
/// let mut array = BucketedArray::new(2);
/// array.extend([1, 2, 3]);
/// let mut cursor = array.fetcher();
/// let mut sum = 0;
/// while cursor.advance() {
///     sum += *cursor.fetch().unwrap();
/// }
/// assert_eq!(sum, 6);
/// ```
pub struct Fetcher<'a, T> {
    iter: Iter<'a, T>,
    current: Option<&'a T>,
}

impl<'a, T> Fetcher<'a, T> {
    pub(crate) fn new(iter: Iter<'a, T>) -> Self {
        Self {
            iter,
            current: None,
        }
    }

    /// Move to the next element. Returns whether one exists.
    pub fn advance(&mut self) -> bool {
        self.current = self.iter.next();
        self.current.is_some()
    }

    /// The element the cursor is on.
    ///
    /// `None` before the first successful [`advance`](Self::advance) and
    /// after the cursor has run off the end.
    pub fn fetch(&self) -> Option<&'a T> {
        self.current
    }
}
