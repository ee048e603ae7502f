//! Core types and traits shared by the Strata containers.
//!
//! This is the leaf crate of the workspace. It defines:
//!
//! - [`ContainerError`], the single failure type returned by operations
//!   that index past the live range of a container.
//! - [`Storage`], the `len / push / get / pop / swap` capability that
//!   `BucketedArray` and `ChunkedStack` both provide, and that the heap
//!   and the sort adapter are generic over.
//! - The channel iteration machinery ([`stream`], [`Emitter`],
//!   [`ChannelIter`]) and its cooperative cancellation ([`Canceller`],
//!   [`CancelToken`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod error;
pub mod storage;
pub mod stream;

pub use cancel::{cancel_pair, CancelToken, Canceller};
pub use error::ContainerError;
pub use storage::Storage;
pub use stream::{stream, ChannelIter, Emitter};
