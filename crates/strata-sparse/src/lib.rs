//! Sparse set for Strata.
//!
//! [`SparseSet`] maps integer keys to values through two arrays: a sparse
//! table indexed by key, and a dense [`BucketedArray`] of the present
//! entries.
//!
//! ```text
//! sparse: [-  -  2  -  0  -  1]      key -> dense position
//! dense:  [(4,a) (6,b) (2,c)]        entries, insertion order
//! ```
//!
//! Lookup, insertion and removal are O(1); iteration walks the sparse
//! table in key order. Removal swaps the newest dense entry into the hole.
//!
//! [`BucketedArray`]: strata_collection::BucketedArray

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod iter;
pub mod key;
pub mod sparse;

pub use config::SparseConfig;
pub use iter::Iter;
pub use key::{SparseKey, NO_SLOT};
pub use sparse::SparseSet;
