//! The sparse set.

use std::fmt;
use std::num::NonZeroUsize;

use strata_collection::BucketedArray;
use strata_core::{stream, CancelToken, ChannelIter, ContainerError};

use crate::config::SparseConfig;
use crate::iter::Iter;
use crate::key::{SparseKey, NO_SLOT};

/// A dense slot: the value and the key that owns it.
#[derive(Clone, Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A sparse-table entry: the dense position of a key, stored one higher
/// so that `Option<Slot>` is a single word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Slot(NonZeroUsize);

impl Slot {
    fn new(position: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(position))
    }

    pub(crate) fn position(self) -> usize {
        self.0.get() - 1
    }
}

/// A key-addressed container for mostly-empty key spaces.
///
/// `sparse[key]` holds the position of the key's entry in the dense
/// bucketed array, or nothing. Only present entries take dense storage,
/// and the sparse table costs one word per addressable key.
///
/// The two sides are kept mutually consistent: for every mapped key `k`,
/// `dense[sparse[k]].key == k`, and for every dense position `p`,
/// `sparse[dense[p].key] == Some(p)`.
///
/// Removing an entry moves the most recently appended entry into the
/// vacated dense position. References from [`get`](Self::get) and friends
/// are borrows and end at the next mutation.
#[derive(Clone)]
pub struct SparseSet<K, V> {
    sparse: Vec<Option<Slot>>,
    dense: BucketedArray<Entry<K, V>>,
}

impl<K: SparseKey, V> SparseSet<K, V> {
    /// Create an empty set addressing `capacity` keys up front.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(SparseConfig::new(capacity))
    }

    /// Create an empty set from a full configuration.
    pub fn with_config(config: SparseConfig) -> Self {
        Self {
            sparse: vec![None; config.capacity],
            dense: BucketedArray::new(config.bucket_size),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Whether the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Number of keys the sparse table currently addresses.
    pub fn capacity(&self) -> usize {
        self.sparse.len()
    }

    fn position(&self, key: K) -> Option<usize> {
        self.sparse
            .get(key.to_index())
            .copied()
            .flatten()
            .map(Slot::position)
    }

    /// Store `value` under `key` and return a reference to it.
    ///
    /// A new key is appended to the dense array; an existing key has its
    /// value overwritten in place. Grows the sparse table when `key` is
    /// beyond its capacity.
    ///
    /// # Panics
    ///
    /// Panics if `key` has no slot in a sparse table (a negative signed
    /// key).
    pub fn set(&mut self, key: K, value: V) -> &mut V {
        let index = key.to_index();
        assert!(index != NO_SLOT, "sparse set key has no table slot");
        if index >= self.sparse.len() {
            let grown = SparseConfig::grown_capacity(self.sparse.len(), index);
            self.sparse.resize(grown, None);
        }
        match self.sparse[index] {
            Some(slot) => {
                let entry = &mut self.dense[slot.position()];
                entry.value = value;
                &mut entry.value
            }
            None => {
                self.sparse[index] = Some(Slot::new(self.dense.len()));
                &mut self.dense.push(Entry { key, value }).value
            }
        }
    }

    /// Reference to the value stored under `key`, or `None` when the key
    /// is unmapped or beyond the sparse table.
    pub fn get(&self, key: K) -> Option<&V> {
        let position = self.position(key)?;
        self.dense.get(position).map(|entry| &entry.value)
    }

    /// Mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let position = self.position(key)?;
        self.dense.get_mut(position).map(|entry| &mut entry.value)
    }

    /// Whether `key` is mapped.
    pub fn contains(&self, key: K) -> bool {
        self.position(key).is_some()
    }

    /// Remove `key` and return its value, or `Ok(None)` when the key is
    /// within range but unmapped.
    ///
    /// The most recently appended entry takes the removed entry's dense
    /// position, unless it is the removed entry itself.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when `key` lies beyond
    /// the sparse table, which includes every negative signed key.
    pub fn delete(&mut self, key: K) -> Result<Option<V>, ContainerError> {
        let index = key.to_index();
        let capacity = self.sparse.len();
        let Some(slot) = self.sparse.get_mut(index) else {
            return Err(ContainerError::out_of_bounds(capacity, index));
        };
        let Some(position) = slot.take().map(Slot::position) else {
            return Ok(None);
        };
        let last = self.dense.pop()?;
        let moved = last.key.to_index();
        if moved == index {
            return Ok(Some(last.value));
        }
        let removed = std::mem::replace(&mut self.dense[position], last);
        self.sparse[moved] = Some(Slot::new(position));
        Ok(Some(removed.value))
    }

    /// Remove and return the most recently appended entry, regardless of
    /// key order, or `None` when the set is empty.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let Entry { key, value } = self.dense.pop().ok()?;
        if let Some(slot) = self.sparse.get_mut(key.to_index()) {
            *slot = None;
        }
        Some((key, value))
    }

    /// Call `callback` with every key and value in ascending key order
    /// until it returns `false`.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(K, &V) -> bool,
    {
        for (key, value) in self.iter() {
            if !callback(key, value) {
                return;
            }
        }
    }

    /// Borrowing iterator over `(key, &value)` in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.sparse, &self.dense)
    }

    /// Walk the set in ascending key order on a producer thread and
    /// consume `(key, &value)` pairs through a bounded channel of
    /// `capacity` slots.
    ///
    /// The producer stops early once `cancel` fires or `consume` drops its
    /// iterator.
    pub fn stream<'a, C, R>(&'a self, capacity: usize, cancel: &CancelToken, consume: C) -> R
    where
        K: Send + Sync,
        V: Sync,
        C: for<'s> FnOnce(ChannelIter<'s, (K, &'a V)>) -> R,
    {
        stream(
            capacity,
            cancel,
            move |emitter| {
                for pair in self.iter() {
                    if !emitter.emit(pair) {
                        return;
                    }
                }
            },
            consume,
        )
    }
}

impl<K: SparseKey, V> Default for SparseSet<K, V> {
    fn default() -> Self {
        Self::with_config(SparseConfig::default())
    }
}

impl<K: SparseKey + fmt::Debug, V: fmt::Debug> fmt::Debug for SparseSet<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: SparseKey, V> Extend<(K, V)> for SparseSet<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: SparseKey, V> FromIterator<(K, V)> for SparseSet<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a, K: SparseKey, V> IntoIterator for &'a SparseSet<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
