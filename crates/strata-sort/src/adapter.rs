//! Len/Less/Swap view over a storage.

use std::marker::PhantomData;

use strata_core::Storage;

/// A sequence that a comparison sort can reorder by index.
pub trait Sortable {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// Adapts any [`Storage`] plus a strict-less comparator into a
/// [`Sortable`].
///
/// `swap` exchanges the stored values themselves, so after sorting the
/// value at each slot is what a later `get` returns.
///
/// ```
/// use strata_collection::BucketedArray;
/// use strata_sort::{sort, SortAdapter};
///
/// let mut array: BucketedArray<i32> = [3, 1, 2].into_iter().collect();
/// sort(&mut SortAdapter::new(&mut array, |a: &i32, b: &i32| a < b));
/// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct SortAdapter<'a, T, S: ?Sized, F> {
    storage: &'a mut S,
    less: F,
    _element: PhantomData<fn(&T)>,
}

impl<'a, T, S, F> SortAdapter<'a, T, S, F>
where
    S: Storage<T> + ?Sized,
    F: Fn(&T, &T) -> bool,
{
    /// Wrap `storage`, ordering elements by `less`.
    ///
    /// `less` must be a strict weak order for the sorted result to be
    /// meaningful.
    pub fn new(storage: &'a mut S, less: F) -> Self {
        Self {
            storage,
            less,
            _element: PhantomData,
        }
    }
}

impl<T, S, F> Sortable for SortAdapter<'_, T, S, F>
where
    S: Storage<T> + ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        match (self.storage.get(i), self.storage.get(j)) {
            (Some(a), Some(b)) => (self.less)(a, b),
            _ => false,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.storage.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_exposes_len_less_swap() {
        let mut values = vec![30, 10, 20];
        let mut adapter = SortAdapter::new(&mut values, |a: &i32, b: &i32| a < b);
        assert_eq!(Sortable::len(&adapter), 3);
        assert!(adapter.less(1, 0));
        assert!(!adapter.less(0, 1));
        assert!(!adapter.less(0, 7));
        Sortable::swap(&mut adapter, 0, 1);
        assert_eq!(values, vec![10, 30, 20]);
    }

    #[test]
    fn swap_moves_values_not_handles() {
        let mut values = vec![String::from("b"), String::from("a")];
        {
            let mut adapter = SortAdapter::new(&mut values, |a: &String, b: &String| a < b);
            Sortable::swap(&mut adapter, 0, 1);
        }
        let first = &values[0];
        assert_eq!(first, "a");
    }
}
