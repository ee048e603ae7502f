//! Deterministic fixtures shared by unit tests, integration tests and
//! benchmarks.

/// Initial contents of the bucketed-array lookup scenario.
pub const LOOKUP_SEED: [i64; 6] = [67, 13, 54, 2, 1, 42];

/// Bucket size used by the lookup scenario.
pub const LOOKUP_BUCKET_SIZE: usize = 500;

/// Heap insertion batches: `put(199)`, `put(5, 6, 8)`,
/// `put(23, 7, 99, 1, 9322)`.
pub const HEAP_BATCHES: [&[i64]; 3] = [&[199], &[5, 6, 8], &[23, 7, 99, 1, 9322]];

/// Keys popped from the heap built from [`HEAP_BATCHES`], in order.
pub const HEAP_DRAIN_ORDER: [i64; 9] = [9322, 199, 99, 23, 8, 7, 6, 5, 1];

/// Unsorted keys with one duplicate (`1725`), used for heap search and
/// allocation checks.
pub const SEARCH_KEYS: [i64; 105] = [
    11515, 11060, 10149, 14106, 8455, 15011, 351, 18648, 14977, 12031, 17133, 3267, 474, 13121,
    10317, 7667, 13085, 17525, 13960, 22954, 19786, 17876, 19255, 13697, 13904, 8465, 22562, 6410,
    6091, 20571, 19691, 562, 14364, 17474, 16705, 6627, 7865, 12715, 1725, 8424, 301, 17197, 14884,
    11808, 1878, 7631, 13099, 22605, 20784, 10772, 15238, 9156, 11909, 14731, 3905, 15847, 5545,
    19264, 14313, 947, 621, 5447, 22300, 5628, 4158, 8241, 8991, 20868, 10700, 9567, 13939, 5342,
    11574, 8504, 9921, 18960, 4437, 6495, 11022, 21598, 21065, 10701, 5205, 21224, 12140, 6364,
    2266, 5964, 16297, 1725, 11793, 11707, 16795, 20712, 789, 15228, 7533, 357, 11296, 18173, 12,
    34, 5, 100, 9090,
];

/// Eight keys in arbitrary order plus the three follow-up insertions used
/// by the heapify tests.
pub const HEAPIFY_KEYS: [i64; 8] = [42, 13, 54, 2, 1, 67, 43, 23];
pub const HEAPIFY_FOLLOW_UPS: [i64; 3] = [16, 43, 67];

/// Names used by the sparse-set scenario, keyed by sparse index.
pub const SPARSE_SCENARIO: [(usize, &str); 7] = [
    (10, "foo"),
    (15, "bar"),
    (25, "baz"),
    (23, "qux"),
    (34, "quux"),
    (56, "corge"),
    (78, "grault"),
];
