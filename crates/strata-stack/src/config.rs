//! Chunked stack configuration parameters.

/// Configuration for a [`ChunkedStack`](crate::ChunkedStack).
///
/// Bucket capacities double from `first_bucket_size` up to
/// `max_bucket_size`; emptied buckets are parked in a pool of at most
/// `recycle_pool` entries for reuse by later pushes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackConfig {
    /// Capacity of the first bucket of an empty stack.
    ///
    /// Default: 1_000.
    pub first_bucket_size: usize,

    /// Upper bound on the capacity of any newly allocated bucket.
    ///
    /// Default: 1_000_000.
    pub max_bucket_size: usize,

    /// Number of emptied buckets kept for reuse.
    ///
    /// Default: 32. Zero disables recycling.
    pub recycle_pool: usize,
}

impl StackConfig {
    /// Default capacity of the first bucket.
    pub const DEFAULT_FIRST_BUCKET_SIZE: usize = 1_000;

    /// Default cap on bucket capacity.
    pub const DEFAULT_MAX_BUCKET_SIZE: usize = 1_000_000;

    /// Default recycle pool size.
    pub const DEFAULT_RECYCLE_POOL: usize = 32;

    /// Create a config with the default values.
    pub fn new() -> Self {
        Self {
            first_bucket_size: Self::DEFAULT_FIRST_BUCKET_SIZE,
            max_bucket_size: Self::DEFAULT_MAX_BUCKET_SIZE,
            recycle_pool: Self::DEFAULT_RECYCLE_POOL,
        }
    }

    /// Capacity of the bucket that follows one of `previous` slots.
    ///
    /// Doubles, clamped to `[1, max_bucket_size]`; `None` (no previous
    /// bucket) yields `first_bucket_size`.
    pub fn next_bucket_size(&self, previous: Option<usize>) -> usize {
        let max = self.max_bucket_size.max(1);
        match previous {
            None => self.first_bucket_size.clamp(1, max),
            Some(prev) => prev.saturating_mul(2).clamp(1, max),
        }
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}
