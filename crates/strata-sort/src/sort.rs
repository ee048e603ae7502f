//! Comparison sort over a [`Sortable`].
//!
//! Introsort: median-of-three quicksort, insertion sort for short runs,
//! and a heapsort fallback once the recursion budget of about
//! `2 * log2(n)` levels is spent. O(n log n) worst case, in place, not
//! stable. Only `len`, `less` and `swap` are used.

use crate::adapter::Sortable;

/// Runs at or below this length are finished by insertion sort.
const INSERTION_THRESHOLD: usize = 12;

/// Sort `data` into ascending order according to its `less`.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let len = data.len();
    let depth = 2 * (usize::BITS - len.leading_zeros()) as usize;
    quick_sort(data, 0, len, depth);
}

/// Whether no element of `data` is less than its predecessor.
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

fn quick_sort<S: Sortable + ?Sized>(data: &mut S, mut lo: usize, mut hi: usize, mut depth: usize) {
    while hi - lo > INSERTION_THRESHOLD {
        if depth == 0 {
            #[cfg(debug_assertions)]
            eprintln!(
                "strata: sort recursion budget exhausted on run of {} elements, falling back to heapsort",
                hi - lo
            );
            heap_sort(data, lo, hi);
            return;
        }
        depth -= 1;
        let pivot = partition(data, lo, hi);
        // Recurse into the smaller side, loop on the larger.
        if pivot - lo < hi - pivot {
            quick_sort(data, lo, pivot, depth);
            lo = pivot + 1;
        } else {
            quick_sort(data, pivot + 1, hi, depth);
            hi = pivot;
        }
    }
    insertion_sort(data, lo, hi);
}

/// Order `a <= b <= c`.
fn median_of_three<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, c: usize) {
    if data.less(b, a) {
        data.swap(a, b);
    }
    if data.less(c, b) {
        data.swap(b, c);
        if data.less(b, a) {
            data.swap(a, b);
        }
    }
}

/// Partition `[lo, hi)` around a median-of-three pivot and return the
/// pivot's final position. Requires `hi - lo >= 3`.
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    median_of_three(data, lo, mid, hi - 1);
    data.swap(lo, mid);

    let pivot = lo;
    let mut i = lo + 1;
    let mut j = hi - 1;
    loop {
        while i <= j && data.less(i, pivot) {
            i += 1;
        }
        while i <= j && data.less(pivot, j) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    data.swap(pivot, j);
    j
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heap_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    let len = hi - lo;
    for root in (0..len / 2).rev() {
        sift_down(data, lo, root, len);
    }
    for end in (1..len).rev() {
        data.swap(lo, lo + end);
        sift_down(data, lo, 0, end);
    }
}

/// Sift the node at `root` down a max-heap of `len` elements based at
/// `offset`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, offset: usize, mut root: usize, len: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && data.less(offset + child, offset + child + 1) {
            child += 1;
        }
        if !data.less(offset + root, offset + child) {
            return;
        }
        data.swap(offset + root, offset + child);
        root = child;
    }
}
