//! Iteration over a sparse set.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use strata_collection::BucketedArray;

use crate::key::SparseKey;
use crate::sparse::{Entry, Slot};

/// Borrowing iterator over a [`SparseSet`](crate::SparseSet), yielding
/// `(key, &value)` in ascending key order.
///
/// Walks the sparse table and skips its holes.
pub struct Iter<'a, K, V> {
    slots: Enumerate<slice::Iter<'a, Option<Slot>>>,
    dense: &'a BucketedArray<Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(sparse: &'a [Option<Slot>], dense: &'a BucketedArray<Entry<K, V>>) -> Self {
        Self {
            slots: sparse.iter().enumerate(),
            dense,
            remaining: dense.len(),
        }
    }
}

impl<'a, K: SparseKey, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.slots.by_ref() {
            let Some(slot) = *slot else {
                continue;
            };
            if let Some(entry) = self.dense.get(slot.position()) {
                self.remaining -= 1;
                return Some((K::from_index(index), &entry.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: SparseKey, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: SparseKey, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            dense: self.dense,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SparseSet;

    #[test]
    fn iter_reports_exact_length() {
        let mut s = SparseSet::new(0);
        for key in [30usize, 4, 12] {
            s.set(key, key);
        }
        let mut it = s.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some((4, &4)));
        assert_eq!(it.len(), 2);
        assert_eq!(it.clone().count(), 2);
        assert_eq!(it.last(), Some((30, &30)));
    }
}
