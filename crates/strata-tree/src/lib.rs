//! Heap-ordered trees for Strata.
//!
//! [`Heap`] is a binary max-heap of [`Node`]s laid out as an implicit
//! complete tree in any [`Storage`](strata_core::Storage), by default a
//! `ChunkedStack`. It supports insertion, max extraction and a keyed
//! [`search`](Heap::search) that prunes subtrees using the heap order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod heap;
pub mod node;

pub use heap::Heap;
pub use node::Node;
