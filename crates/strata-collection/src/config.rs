//! Bucketed array configuration parameters.

/// Configuration for a [`BucketedArray`](crate::BucketedArray).
///
/// Immutable after construction of the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketConfig {
    /// Number of element slots per bucket.
    ///
    /// Default: 1000. Zero selects the default.
    pub bucket_size: usize,

    /// Release a bucket as soon as `pop` empties it.
    ///
    /// Default: `false`, which keeps emptied buckets allocated so that a
    /// following `push` reuses them; call `prune` to reclaim them.
    pub release_empty_buckets: bool,
}

impl BucketConfig {
    /// Default number of slots per bucket.
    pub const DEFAULT_BUCKET_SIZE: usize = 1000;

    /// Create a config with the given bucket size (0 selects the default).
    pub fn new(bucket_size: usize) -> Self {
        Self {
            bucket_size,
            release_empty_buckets: false,
        }
    }

    /// Builder-style setter for [`release_empty_buckets`](Self::release_empty_buckets).
    pub fn release_empty_buckets(mut self, release: bool) -> Self {
        self.release_empty_buckets = release;
        self
    }

    /// The bucket size actually used, with zero resolved to the default.
    pub fn effective_bucket_size(&self) -> usize {
        if self.bucket_size == 0 {
            Self::DEFAULT_BUCKET_SIZE
        } else {
            self.bucket_size
        }
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
