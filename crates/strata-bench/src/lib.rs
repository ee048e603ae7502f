//! Benchmark inputs for the Strata containers.
//!
//! Key streams are generated from a seeded ChaCha8 generator so that every
//! run measures the same workload.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` pseudo-random keys below `bound` (with repeats).
pub fn random_keys(seed: u64, n: usize, bound: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64() % bound.max(1)).collect()
}

/// The integers `0..n` in a seeded random order (Fisher-Yates).
pub fn shuffled_range(seed: u64, n: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<u64> = (0..n as u64).collect();
    for i in (1..values.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        values.swap(i, j);
    }
    values
}
