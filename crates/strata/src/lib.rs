//! Strata: container primitives that grow without reallocating.
//!
//! This is the facade crate re-exporting the public API of all Strata
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Bucketed array: append-only growth, O(1) swap-delete.
//! let mut array = BucketedArray::new(500);
//! array.extend([67, 13, 54, 2, 1, 42]);
//! array.push(43);
//! assert_eq!(array.get(6), Some(&43));
//!
//! // Sort it in place through the adapter.
//! sort(&mut SortAdapter::new(&mut array, |a: &i32, b: &i32| a < b));
//! assert_eq!(array.get(0), Some(&1));
//!
//! // Sparse set keyed by integers.
//! let mut names = SparseSet::new(0);
//! names.set(10usize, "foo");
//! names.set(15, "bar");
//! names.delete(10)?;
//! assert_eq!(names.get(15), Some(&"bar"));
//!
//! // Max-heap over a chunked stack.
//! let mut heap: Heap<u32, &str> = Heap::new();
//! heap.put(Node::new(5, "low"));
//! heap.put(Node::new(9, "high"));
//! assert_eq!(heap.pop_max().map(|n| *n.data()), Some("high"));
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | `ContainerError`, `Storage`, cancellation, channel streaming |
//! | [`collection`] | `strata-collection` | `BucketedArray`, iterators, `Fetcher` |
//! | [`stack`] | `strata-stack` | `ChunkedStack` |
//! | [`sparse`] | `strata-sparse` | `SparseSet`, `SparseKey` |
//! | [`tree`] | `strata-tree` | `Heap`, `Node` |
//! | [`sort`] | `strata-sort` | `Sortable`, `SortAdapter`, `sort` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared error type, storage trait and channel streaming (`strata-core`).
///
/// [`types::stream`] runs a producer on a scoped thread and hands the
/// consumer a [`types::ChannelIter`]; [`types::cancel_pair`] creates the
/// cancellation handle pair the containers' `stream` methods accept.
pub use strata_core as types;

/// Bucketed dynamic array (`strata-collection`).
pub use strata_collection as collection;

/// Chunked stack with doubling buckets and a locality cache
/// (`strata-stack`).
pub use strata_stack as stack;

/// Sparse set over a bucketed dense array (`strata-sparse`).
pub use strata_sparse as sparse;

/// Binary max-heap with keyed search (`strata-tree`).
///
/// [`tree::Heap`] works over any [`types::Storage`] of [`tree::Node`]s.
pub use strata_tree as tree;

/// Len/Less/Swap adapter and comparison sort (`strata-sort`).
pub use strata_sort as sort;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use strata_core::{cancel_pair, CancelToken, ContainerError, Storage};

    // Containers
    pub use strata_collection::{BucketConfig, BucketedArray};
    pub use strata_sparse::{SparseConfig, SparseKey, SparseSet};
    pub use strata_stack::{ChunkedStack, Direction, StackConfig};
    pub use strata_tree::{Heap, Node};

    // Sorting
    pub use strata_sort::{is_sorted, sort, SortAdapter, Sortable};
}
