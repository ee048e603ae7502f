//! Chunked stack for Strata.
//!
//! [`ChunkedStack`] is a LIFO stack with indexed access, stored as a chain
//! of buckets whose capacities double as the stack grows:
//!
//! ```text
//! ChunkedStack (len = 9, first bucket = 2)
//! ├── bucket 0: [a b]          indices 0..2
//! ├── bucket 1: [c d e f]      indices 2..6
//! └── bucket 2: [g h i _ _ _ _ _]   indices 6..9, top
//! ```
//!
//! Elements never move once pushed. Buckets emptied by `pop` go to a small
//! recycle pool (see [`StackConfig::recycle_pool`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod chunk;
pub mod config;
pub mod iter;
pub mod stack;

pub use config::StackConfig;
pub use iter::{Direction, Iter};
pub use stack::ChunkedStack;
