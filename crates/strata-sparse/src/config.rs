//! Sparse set configuration parameters.

/// Configuration for a [`SparseSet`](crate::SparseSet).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseConfig {
    /// Number of keys the sparse table addresses before its first growth.
    ///
    /// Default: 0. The table grows on demand either way.
    pub capacity: usize,

    /// Bucket size of the dense backing array.
    ///
    /// Default: 0, which selects the bucketed array's own default.
    pub bucket_size: usize,
}

impl SparseConfig {
    /// Create a config with the given initial sparse capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bucket_size: 0,
        }
    }

    /// Builder-style setter for [`bucket_size`](Self::bucket_size).
    pub fn bucket_size(mut self, bucket_size: usize) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Size of the sparse table after growing to hold key index `index`
    /// from `current` slots: double, or `index + 1` if doubling falls short.
    pub(crate) fn grown_capacity(current: usize, index: usize) -> usize {
        current.saturating_mul(2).max(index.saturating_add(1))
    }
}
