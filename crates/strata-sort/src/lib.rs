//! Sorting for Strata storages.
//!
//! [`SortAdapter`] turns any `Storage` and a strict-less comparator into
//! the [`Sortable`] `len / less / swap` triple; [`sort`] is a comparison
//! sort driven only through that triple.
//!
//! ```
//! use strata_stack::ChunkedStack;
//! use strata_sort::{is_sorted, sort, SortAdapter};
//!
//! let mut stack: ChunkedStack<&str> = ["pear", "fig", "apple"].into_iter().collect();
//! let mut by_len = SortAdapter::new(&mut stack, |a: &&str, b: &&str| a.len() < b.len());
//! sort(&mut by_len);
//! assert!(is_sorted(&by_len));
//! assert_eq!(stack.peek(), Ok(&"apple"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod sort;

pub use adapter::{SortAdapter, Sortable};
pub use sort::{is_sorted, sort};
