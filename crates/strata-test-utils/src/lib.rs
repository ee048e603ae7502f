//! Reference models and fixtures for Strata development.
//!
//! The models are deliberately naive (`Vec`, `IndexMap`) so that property
//! tests can replay a random operation sequence against both a container
//! and its model and compare every observable result.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

pub use model::{Op, SparseModel, SparseOp, VecModel};
