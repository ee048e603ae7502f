//! Bucketed dynamic array for Strata.
//!
//! [`BucketedArray`] stores elements in a grow-only list of fixed-capacity
//! buckets, so appending never reallocates or copies existing elements.
//! Removal is O(1) swap-delete.
//!
//! ```text
//! BucketedArray (len = 7, bucket_size = 3)
//! ├── Bucket 0: [a b c]   indices 0..3
//! ├── Bucket 1: [d e f]   indices 3..6
//! └── Bucket 2: [g _ _]   index 6, two free slots
//! ```
//!
//! Traversal comes in four flavours over the same order: [`BucketedArray::each`]
//! (callback with early stop), [`BucketedArray::iter`], the [`Fetcher`]
//! cursor, and [`BucketedArray::stream`] (producer thread + bounded
//! channel with cancellation).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bucket;
pub mod collection;
pub mod config;
pub mod iter;

pub use collection::BucketedArray;
pub use config::BucketConfig;
pub use iter::{Fetcher, Iter};
