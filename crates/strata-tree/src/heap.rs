//! Binary max-heap over a [`Storage`] of nodes.

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;
use strata_core::Storage;
use strata_stack::ChunkedStack;

use crate::node::Node;

/// Depth of explicit DFS stack kept inline by [`Heap::search`].
const SEARCH_STACK_INLINE: usize = 64;

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// A binary max-heap of [`Node`]s, stored as an implicit complete tree in
/// any [`Storage`].
///
/// Slot `i` has children `2i + 1` and `2i + 2`. Every node's key is at
/// least as large as its children's, so the root holds the maximum.
/// Besides max extraction, the ordering lets [`search`](Self::search)
/// skip every subtree whose root key is already below the target.
///
/// The default storage is a [`ChunkedStack`]; a `BucketedArray` (or a
/// plain `Vec`) works the same.
pub struct Heap<K, V, S = ChunkedStack<Node<K, V>>> {
    storage: S,
    _node: PhantomData<fn() -> Node<K, V>>,
}

impl<K: Ord, V> Heap<K, V> {
    /// Create an empty heap over a fresh [`ChunkedStack`].
    pub fn new() -> Self {
        Self::from_storage(ChunkedStack::new())
    }
}

impl<K: Ord, V, S: Storage<Node<K, V>>> Heap<K, V, S> {
    /// Wrap `storage`, reordering its current contents into a heap.
    ///
    /// Arbitrary initial order is fixed by a bottom-up pass that sifts
    /// down every parent from the last one to the root, in O(n).
    pub fn from_storage(storage: S) -> Self {
        let mut heap = Self {
            storage,
            _node: PhantomData,
        };
        heap.heapify();
        heap
    }

    fn heapify(&mut self) {
        let len = self.storage.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the heap holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The backing storage, in heap order.
    pub fn as_storage(&self) -> &S {
        &self.storage
    }

    /// Unwrap the backing storage, in heap order.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Whether the key at `a` is strictly less than the key at `b`.
    /// Missing slots compare as not less.
    fn less(&self, a: usize, b: usize) -> bool {
        match (self.storage.get(a), self.storage.get(b)) {
            (Some(x), Some(y)) => x.key() < y.key(),
            _ => false,
        }
    }

    /// Insert `node`, restoring the heap order along its path to the
    /// root. O(log n).
    pub fn put(&mut self, node: Node<K, V>) {
        let index = self.storage.len();
        self.storage.push(node);
        self.sift_up(index);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if !self.less(up, index) {
                return;
            }
            self.storage.swap(up, index);
            index = up;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let left_greater = left < len && self.less(index, left);
            let right_greater = right < len && self.less(index, right);
            let right_over_left = right < len && self.less(left, right);
            // Ties between the children go left.
            if left_greater && !right_over_left {
                self.storage.swap(index, left);
                index = left;
            } else if right_greater {
                self.storage.swap(index, right);
                index = right;
            } else {
                return;
            }
        }
    }

    /// Reference to the node with the largest key.
    pub fn peek_max(&self) -> Option<&Node<K, V>> {
        self.storage.get(0)
    }

    /// Remove and return the node with the largest key, or `None` when
    /// empty.
    pub fn pop_max(&mut self) -> Option<Node<K, V>> {
        let last = self.storage.pop().ok()?;
        let Some(root) = self.storage.get_mut(0) else {
            return Some(last);
        };
        let max = std::mem::replace(root, last);
        self.sift_down(0);
        Some(max)
    }

    /// Position of a node whose key equals `key`.
    ///
    /// Depth-first, left subtree before right, pruning every subtree
    /// whose root key is below `key`. The explicit stack stays inline for
    /// any realistic heap depth.
    fn find(&self, key: &K) -> Option<usize> {
        let len = self.storage.len();
        let mut pending: SmallVec<[usize; SEARCH_STACK_INLINE]> = SmallVec::new();
        if len > 0 {
            pending.push(0);
        }
        while let Some(index) = pending.pop() {
            let Some(node) = self.storage.get(index) else {
                continue;
            };
            if node.key() == key {
                return Some(index);
            }
            if node.key() < key {
                continue;
            }
            let (left, right) = (left_child(index), right_child(index));
            if right < len {
                pending.push(right);
            }
            if left < len {
                pending.push(left);
            }
        }
        None
    }

    /// Reference to a node whose key equals `key`, or `None`.
    ///
    /// Worst case O(n); subtrees rooted below `key` are never visited.
    /// Does not allocate.
    pub fn search(&self, key: &K) -> Option<&Node<K, V>> {
        let index = self.find(key)?;
        self.storage.get(index)
    }

    /// Mutable reference to a node whose key equals `key`, or `None`.
    ///
    /// Only the node's data can be changed through it.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut Node<K, V>> {
        let index = self.find(key)?;
        self.storage.get_mut(index)
    }
}

impl<K: Ord, V> Default for Heap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, S: Storage<Node<K, V>>> Extend<Node<K, V>> for Heap<K, V, S> {
    fn extend<I: IntoIterator<Item = Node<K, V>>>(&mut self, nodes: I) {
        for node in nodes {
            self.put(node);
        }
    }
}

impl<K: Ord, V> FromIterator<Node<K, V>> for Heap<K, V> {
    fn from_iter<I: IntoIterator<Item = Node<K, V>>>(nodes: I) -> Self {
        let mut heap = Self::new();
        heap.extend(nodes);
        heap
    }
}

impl<K, V, S: fmt::Debug> fmt::Debug for Heap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("storage", &self.storage).finish()
    }
}
