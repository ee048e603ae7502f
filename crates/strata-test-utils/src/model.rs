//! Naive reference models for the chunked containers.

use std::fmt::Debug;

use indexmap::IndexMap;
use strata_core::Storage;

/// One step of a random operation sequence against a sequence container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Push(u32),
    Pop,
    /// Swap-delete of the element at `index % len`.
    Delete(usize),
    /// Probe `index` (may be past the end).
    Get(usize),
}

/// `Vec`-backed model of an append / swap-delete sequence.
#[derive(Clone, Debug, Default)]
pub struct VecModel<T> {
    items: Vec<T>,
}

impl<T: Clone + PartialEq + Debug> VecModel<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Remove `index` by moving the last element into its slot.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.swap_remove(index))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Assert that `storage` holds exactly the model's elements, in order.
    pub fn assert_matches<S: Storage<T> + ?Sized>(&self, storage: &S) {
        assert_eq!(storage.len(), self.items.len(), "length mismatch");
        for (i, expected) in self.items.iter().enumerate() {
            assert_eq!(storage.get(i), Some(expected), "mismatch at index {i}");
        }
        assert_eq!(storage.get(self.items.len()), None, "element past the end");
    }
}

/// One step of a random operation sequence against a sparse set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparseOp {
    Set(usize, u32),
    Delete(usize),
    Pop,
    Get(usize),
}

/// `IndexMap`-backed model of a sparse set.
///
/// The map's insertion order stands in for the dense array: `swap_remove`
/// moves the last entry into the removed position and `pop` removes the
/// most recently appended entry, which is exactly how the dense side of a
/// sparse set behaves.
#[derive(Clone, Debug, Default)]
pub struct SparseModel<V> {
    entries: IndexMap<usize, V>,
}

impl<V: Clone + PartialEq + Debug> SparseModel<V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite in place (keeps the dense position).
    pub fn set(&mut self, key: usize, value: V) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: usize) -> Option<&V> {
        self.entries.get(&key)
    }

    pub fn delete(&mut self, key: usize) -> Option<V> {
        self.entries.swap_remove(&key)
    }

    pub fn pop(&mut self) -> Option<(usize, V)> {
        self.entries.pop()
    }

    /// Keys in dense (insertion / swap-delete) order.
    pub fn dense_keys(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    /// Entries in ascending key order.
    pub fn sorted_entries(&self) -> Vec<(usize, V)> {
        let mut out: Vec<(usize, V)> = self
            .entries
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }
}
