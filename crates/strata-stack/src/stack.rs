//! The chunked stack.

use std::cell::Cell;
use std::fmt;
use std::iter::Rev;

use strata_core::{stream, CancelToken, ChannelIter, ContainerError, Storage};

use crate::chunk::Chunk;
use crate::config::StackConfig;
use crate::iter::{Direction, Iter};

/// Remembered position of the last bucket visited by a random access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Locality {
    /// Position of the bucket in the chain.
    bucket: usize,
    /// Number of elements stored in all older buckets.
    base: usize,
}

/// A stack made of a chain of buckets whose capacities double.
///
/// Index `0` is the bottom (oldest element) and `len() - 1` the top. Pushes
/// fill the newest bucket and start a new, twice as large one when it is
/// full; a bucket emptied by `pop` is detached from the chain and parked in
/// a small recycle pool so that push/pop churn around a bucket boundary
/// does not allocate.
///
/// Random access walks the chain from the top towards the bottom. A
/// one-entry locality cache remembers the last bucket found, so repeated
/// or nearby lookups (including forward scans) skip the walk.
#[derive(Clone)]
pub struct ChunkedStack<T> {
    count: usize,
    /// The chain, oldest bucket first; bucket `b` links to `b - 1`.
    chain: Vec<Chunk<T>>,
    pool: Vec<Chunk<T>>,
    locality: Cell<Option<Locality>>,
    config: StackConfig,
}

impl<T> ChunkedStack<T> {
    /// Create an empty stack with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StackConfig::default())
    }

    /// Create an empty stack with the given configuration.
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            count: 0,
            chain: Vec::new(),
            pool: Vec::new(),
            locality: Cell::new(None),
            config,
        }
    }

    /// Adopt `values` as the single initial bucket, bottom first.
    ///
    /// The vector's spare capacity is used before a second bucket is
    /// allocated.
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut stack = Self::new();
        if values.capacity() > 0 || !values.is_empty() {
            stack.count = values.len();
            stack.chain.push(Chunk::adopt(values));
        }
        stack
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets currently in the chain.
    pub fn bucket_count(&self) -> usize {
        self.chain.len()
    }

    /// Number of emptied buckets waiting for reuse.
    pub fn pooled_buckets(&self) -> usize {
        self.pool.len()
    }

    fn top_index(&self) -> Option<usize> {
        self.chain.len().checked_sub(1)
    }

    fn forget_locality_if(&self, bucket: usize) {
        if self.locality.get().is_some_and(|l| l.bucket == bucket) {
            self.locality.set(None);
        }
    }

    /// Push `value` on top and return a reference to the stored element.
    pub fn push(&mut self, value: T) -> &mut T {
        let top = match self.top_index() {
            Some(top) if !self.chain[top].is_full() => {
                self.forget_locality_if(top);
                top
            }
            _ => self.grow(),
        };
        self.count += 1;
        self.chain[top].push(value)
    }

    /// Attach a new empty bucket on top of the chain and return its index.
    fn grow(&mut self) -> usize {
        self.locality.set(None);
        let previous = self.chain.last().map(Chunk::capacity);
        let chunk = match self.pool.pop() {
            Some(chunk) => chunk,
            None => Chunk::new(self.config.next_bucket_size(previous)),
        };
        self.chain.push(chunk);
        self.chain.len() - 1
    }

    /// Remove and return the top element.
    ///
    /// A bucket emptied by this call is detached and recycled.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when empty.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let top = match self.top_index() {
            Some(top) if self.count > 0 => top,
            _ => return Err(ContainerError::out_of_bounds(0, 0)),
        };
        self.locality.set(None);
        let value = self.chain[top]
            .pop()
            .ok_or(ContainerError::out_of_bounds(self.count, self.count - 1))?;
        self.count -= 1;
        if self.chain[top].is_empty() {
            self.retire_top();
        }
        Ok(value)
    }

    fn retire_top(&mut self) {
        let Some(chunk) = self.chain.pop() else {
            return;
        };
        if self.pool.len() < self.config.recycle_pool {
            self.pool.push(chunk);
            return;
        }
        #[cfg(debug_assertions)]
        eprintln!(
            "strata: ChunkedStack recycle pool full ({} buckets), releasing bucket of {} slots",
            self.pool.len(),
            chunk.capacity(),
        );
    }

    /// Reference to the top element.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        match self.count.checked_sub(1) {
            Some(top) => self.peek_at(top),
            None => Err(ContainerError::out_of_bounds(0, 0)),
        }
    }

    /// Mutable reference to the top element.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        match self.count.checked_sub(1) {
            Some(top) => self.peek_at_mut(top),
            None => Err(ContainerError::out_of_bounds(0, 0)),
        }
    }

    /// Reference to the element at `index`, counted from the bottom.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when `index >= len()`.
    pub fn peek_at(&self, index: usize) -> Result<&T, ContainerError> {
        let (bucket, offset) = self.locate(index)?;
        self.chain[bucket]
            .as_slice()
            .get(offset)
            .ok_or(ContainerError::out_of_bounds(self.count, index))
    }

    /// Mutable reference to the element at `index`, counted from the
    /// bottom.
    ///
    /// Fails with [`ContainerError::OutOfBounds`] when `index >= len()`.
    pub fn peek_at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let (bucket, offset) = self.locate(index)?;
        let count = self.count;
        self.chain[bucket]
            .as_mut_slice()
            .get_mut(offset)
            .ok_or(ContainerError::out_of_bounds(count, index))
    }

    /// Same as [`peek_at`](Self::peek_at).
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.peek_at(index)
    }

    /// Resolve a logical index to `(bucket, offset)`.
    ///
    /// The walk starts at the cached bucket when the target lies at or
    /// below the cached bucket's end, otherwise at the top, and moves down
    /// the chain until the bucket containing `index` is reached.
    fn locate(&self, index: usize) -> Result<(usize, usize), ContainerError> {
        let out_of_bounds = ContainerError::out_of_bounds(self.count, index);
        if index >= self.count {
            return Err(out_of_bounds);
        }
        let mut bucket = self.top_index().ok_or(out_of_bounds)?;
        let mut base = self.count - self.chain[bucket].len();
        if let Some(cached) = self.locality.get() {
            if index < cached.base + self.chain[cached.bucket].len() {
                bucket = cached.bucket;
                base = cached.base;
            }
        }
        while index < base {
            bucket = bucket.checked_sub(1).ok_or(out_of_bounds)?;
            base -= self.chain[bucket].len();
        }
        self.locality.set(Some(Locality { bucket, base }));
        Ok((bucket, index - base))
    }

    /// Exchange the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is not below `len()`.
    pub fn swap(&mut self, a: usize, b: usize) {
        let (Ok((ba, oa)), Ok((bb, ob))) = (self.locate(a), self.locate(b)) else {
            panic!(
                "swap indices ({a}, {b}) out of bounds for length {}",
                self.count
            );
        };
        if ba == bb {
            self.chain[ba].as_mut_slice().swap(oa, ob);
            return;
        }
        let (lo, lo_off, hi, hi_off) = if ba < bb {
            (ba, oa, bb, ob)
        } else {
            (bb, ob, ba, oa)
        };
        let (older, newer) = self.chain.split_at_mut(hi);
        std::mem::swap(
            &mut older[lo].as_mut_slice()[lo_off],
            &mut newer[0].as_mut_slice()[hi_off],
        );
    }

    /// Call `callback` on every element from bottom to top until it
    /// returns `false`.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&T) -> bool,
    {
        for value in self.iter() {
            if !callback(value) {
                return;
            }
        }
    }

    /// Iterator from bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.chain, self.count)
    }

    /// Iterator from top to bottom, i.e. the order `pop` would return.
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Walk the stack in `direction` on a producer thread and consume the
    /// elements through a bounded channel of `capacity` slots.
    ///
    /// The producer stops early once `cancel` fires or `consume` drops its
    /// iterator. The stack cannot be mutated while the stream runs.
    pub fn stream<'a, C, R>(
        &'a self,
        direction: Direction,
        capacity: usize,
        cancel: &CancelToken,
        consume: C,
    ) -> R
    where
        T: Sync,
        C: for<'s> FnOnce(ChannelIter<'s, &'a T>) -> R,
    {
        // The locality cache is not shared with the producer; it walks the
        // chain directly.
        let chain: &'a [Chunk<T>] = &self.chain;
        let count = self.count;
        stream(
            capacity,
            cancel,
            move |emitter| {
                let iter = Iter::new(chain, count);
                match direction {
                    Direction::Forward => {
                        for value in iter {
                            if !emitter.emit(value) {
                                return;
                            }
                        }
                    }
                    Direction::Backward => {
                        for value in iter.rev() {
                            if !emitter.emit(value) {
                                return;
                            }
                        }
                    }
                }
            },
            consume,
        )
    }
}

impl<T> Default for ChunkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ChunkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ChunkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a ChunkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Storage<T> for ChunkedStack<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, value: T) -> &mut T {
        ChunkedStack::push(self, value)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.peek_at(index).ok()
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.peek_at_mut(index).ok()
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        ChunkedStack::pop(self)
    }

    fn swap(&mut self, a: usize, b: usize) {
        ChunkedStack::swap(self, a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::rc::Rc;
    use strata_core::cancel_pair;
    use strata_test_utils::{Op, VecModel};

    fn small(first: usize, max: usize) -> ChunkedStack<u32> {
        ChunkedStack::with_config(StackConfig {
            first_bucket_size: first,
            max_bucket_size: max,
            recycle_pool: 2,
        })
    }

    #[test]
    fn push_then_peek_at_preserves_order() {
        let mut s = ChunkedStack::new();
        s.push(101i64);
        s.push(102);
        s.push(103);
        assert_eq!(s.peek_at(2), Ok(&103));
        assert_eq!(s.peek_at(1), Ok(&102));
        assert_eq!(s.peek_at(0), Ok(&101));
        assert_eq!(s.peek(), Ok(&103));
    }

    #[test]
    fn peek_past_end_is_out_of_bounds() {
        let mut s = ChunkedStack::new();
        assert_eq!(s.peek(), Err(ContainerError::OutOfBounds { len: 0, index: 0 }));
        s.push(1u8);
        assert_eq!(
            s.peek_at(1),
            Err(ContainerError::OutOfBounds { len: 1, index: 1 })
        );
        assert_eq!(s.get(0), Ok(&1));
    }

    #[test]
    fn bucket_capacities_double() {
        let mut s = small(2, 100);
        s.extend(0..14);
        // 2 + 4 + 8 = 14
        assert_eq!(s.bucket_count(), 3);
        s.push(14);
        assert_eq!(s.bucket_count(), 4);
        assert_eq!(s.chain[3].capacity(), 16);
    }

    #[test]
    fn bucket_capacity_is_capped() {
        let mut s = small(2, 4);
        s.extend(0..14);
        let caps: Vec<usize> = s.chain.iter().map(Chunk::capacity).collect();
        assert_eq!(caps, vec![2, 4, 4, 4]);
    }

    #[test]
    fn collect_then_extend_grows_the_chain() {
        let mut s: ChunkedStack<u32> = (0..1_500).collect();
        assert_eq!(s.bucket_count(), 2);
        Extend::extend(&mut s, 1_500..3_000);
        s.extend(3_000..3_001);
        assert_eq!(s.len(), 3_001);
        assert_eq!(s.bucket_count(), 3);
        assert_eq!(s.peek(), Ok(&3_000));
        assert_eq!(s.peek_at(1_000), Ok(&1_000));
    }

    #[test]
    fn pop_is_lifo_across_buckets() {
        let mut s = small(2, 8);
        s.extend(0..40);
        for expected in (0..40).rev() {
            assert_eq!(s.pop(), Ok(expected));
        }
        assert_eq!(s.pop(), Err(ContainerError::OutOfBounds { len: 0, index: 0 }));
        assert_eq!(s.bucket_count(), 0);
    }

    #[test]
    fn emptied_bucket_goes_to_pool_and_is_reused() {
        let mut s = small(2, 8);
        s.extend(0..3);
        assert_eq!(s.bucket_count(), 2);
        s.pop().unwrap();
        assert_eq!(s.bucket_count(), 1);
        assert_eq!(s.pooled_buckets(), 1);
        s.push(7);
        assert_eq!(s.bucket_count(), 2);
        assert_eq!(s.pooled_buckets(), 0);
        assert_eq!(s.chain[1].capacity(), 4);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![0, 1, 7]);
    }

    #[test]
    fn pool_is_bounded() {
        let mut s = small(1, 1);
        s.extend(0..10);
        for _ in 0..10 {
            s.pop().unwrap();
        }
        assert_eq!(s.pooled_buckets(), 2);
    }

    #[test]
    fn from_vec_adopts_values_as_bottom() {
        let mut s = ChunkedStack::from_vec(vec![42, 13, 54]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.bucket_count(), 1);
        s.push(2);
        s.push(1);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![42, 13, 54, 2, 1]);
        assert_eq!(s.peek(), Ok(&1));
    }

    #[test]
    fn from_empty_vec_is_empty() {
        let mut s = ChunkedStack::from_vec(Vec::<u8>::new());
        assert!(s.is_empty());
        assert_eq!(s.bucket_count(), 0);
        s.push(1);
        assert_eq!(s.peek(), Ok(&1));
    }

    #[test]
    fn locality_cache_tracks_last_bucket() {
        let mut s = small(2, 8);
        s.extend(0..14);
        assert_eq!(s.peek_at(1), Ok(&1));
        assert_eq!(s.locality.get(), Some(Locality { bucket: 0, base: 0 }));
        assert_eq!(s.peek_at(4), Ok(&4));
        assert_eq!(s.locality.get(), Some(Locality { bucket: 1, base: 2 }));
        assert_eq!(s.peek_at(3), Ok(&3));
        assert_eq!(s.locality.get(), Some(Locality { bucket: 1, base: 2 }));
        assert_eq!(s.peek_at(0), Ok(&0));
        assert_eq!(s.locality.get(), Some(Locality { bucket: 0, base: 0 }));
    }

    #[test]
    fn locality_cache_invalidated_by_structural_change() {
        let mut s = small(2, 8);
        s.extend(0..4);
        assert_eq!(s.peek_at(3), Ok(&3));
        assert!(s.locality.get().is_some());
        // Push into the cached (top) bucket.
        s.push(4);
        assert_eq!(s.locality.get(), None);
        assert_eq!(s.peek_at(0), Ok(&0));
        // Push into the top bucket leaves a cache on a lower bucket alone.
        s.push(5);
        assert_eq!(s.locality.get(), Some(Locality { bucket: 0, base: 0 }));
        s.pop().unwrap();
        assert_eq!(s.locality.get(), None);
    }

    #[test]
    fn sequential_and_reverse_scans_agree() {
        let mut s = ChunkedStack::new();
        const COUNT: usize = 100_000;
        for n in 0..COUNT {
            assert_eq!(s.len(), n);
            s.push((n, n.to_string()));
        }
        for n in 0..COUNT {
            let (i, text) = s.peek_at(n).unwrap();
            assert_eq!(*i, n);
            assert_eq!(*text, n.to_string());
        }
        for n in (0..COUNT).rev() {
            assert_eq!(s.peek_at(n).unwrap().0, n);
        }
    }

    #[test]
    fn peek_mut_and_peek_at_mut_update_in_place() {
        let mut s = small(2, 8);
        s.extend(0..6);
        *s.peek_mut().unwrap() = 50;
        *s.peek_at_mut(1).unwrap() = 10;
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![0, 10, 2, 3, 4, 50]);
    }

    #[test]
    fn swap_within_and_across_buckets() {
        let mut s = small(2, 8);
        s.extend(0..7);
        s.swap(0, 1);
        s.swap(6, 0);
        s.swap(3, 5);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![6, 0, 2, 5, 4, 3, 1]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn swap_past_end_panics() {
        let mut s = small(2, 8);
        s.push(0);
        s.swap(0, 3);
    }

    #[test]
    fn each_stops_early() {
        let mut s = small(2, 8);
        s.extend(0..20);
        let mut seen = Vec::new();
        s.each(|v| {
            seen.push(*v);
            seen.len() < 5
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn stream_forward_and_backward() {
        let mut s = small(3, 16);
        s.extend(0..200);
        let token = CancelToken::never();
        let forward: Vec<u32> = s.stream(Direction::Forward, 4, &token, |it| it.copied().collect());
        assert_eq!(forward, (0..200).collect::<Vec<_>>());
        let backward: Vec<u32> =
            s.stream(Direction::Backward, 0, &token, |it| it.copied().collect());
        assert_eq!(backward, (0..200).rev().collect::<Vec<_>>());
    }

    #[test]
    fn stream_over_empty_stack() {
        let s = ChunkedStack::<u32>::new();
        let token = CancelToken::never();
        assert_eq!(s.stream(Direction::Forward, 1, &token, |it| it.count()), 0);
        assert_eq!(s.stream(Direction::Backward, 1, &token, |it| it.count()), 0);
    }

    #[test]
    fn cancelled_stream_yields_nothing() {
        let mut s = ChunkedStack::new();
        s.extend(0..10u32);
        let (canceller, token) = cancel_pair();
        canceller.cancel();
        assert_eq!(s.stream(Direction::Backward, 0, &token, |it| it.count()), 0);
    }

    #[test]
    fn clone_keeps_pooled_bucket_allocated() {
        let mut s = small(2, 8);
        s.extend(0..3);
        s.pop().unwrap();
        let mut copy = s.clone();
        assert_eq!(copy.pooled_buckets(), 1);

        copy.push(10);
        let start = copy.chain[1].as_slice().as_ptr();
        copy.extend(11..14);
        assert!(copy.chain[1].is_full());
        assert_eq!(copy.chain[1].as_slice().as_ptr(), start);
        assert_eq!(copy.bucket_count(), 2);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn pop_releases_popped_value() {
        let shared = Rc::new(());
        let mut s = ChunkedStack::with_config(StackConfig {
            first_bucket_size: 2,
            max_bucket_size: 8,
            recycle_pool: 2,
        });
        for _ in 0..5 {
            s.push(Rc::clone(&shared));
        }
        for remaining in (0..5).rev() {
            drop(s.pop().unwrap());
            assert_eq!(Rc::strong_count(&shared), remaining + 1);
        }
        assert_eq!(s.pooled_buckets(), 2);
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u32>().prop_map(Op::Push),
            3 => Just(Op::Pop),
            3 => (0usize..64).prop_map(Op::Get),
        ]
    }

    proptest! {
        #[test]
        fn matches_vec_model(
            first in 1usize..5,
            max in 1usize..17,
            ops in proptest::collection::vec(op_strategy(), 0..300),
        ) {
            let mut s = small(first, max);
            let mut model = VecModel::new();
            for op in ops {
                match op {
                    Op::Push(v) => {
                        prop_assert_eq!(*s.push(v), v);
                        model.push(v);
                    }
                    Op::Pop => {
                        prop_assert_eq!(s.pop().ok(), model.pop());
                    }
                    Op::Delete(_) => {}
                    Op::Get(i) => {
                        prop_assert_eq!(s.peek_at(i).ok(), model.get(i));
                    }
                }
                prop_assert_eq!(s.len(), model.len());
                prop_assert_eq!(s.peek().ok(), model.as_slice().last());
            }
            model.assert_matches(&s);
        }
    }
}
