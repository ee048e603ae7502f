//! Keys that address a sparse table directly.

/// Index reported by [`SparseKey::to_index`] for a key that has no slot.
///
/// No sparse table is ever this long, so such keys are never mapped.
pub const NO_SLOT: usize = usize::MAX;

/// An integer key usable as a [`SparseSet`](crate::SparseSet) index.
///
/// The key's value is its slot in the sparse table. Every key with a slot
/// must round-trip through [`from_index`](Self::from_index); keys with no
/// slot (negative signed keys) map to [`NO_SLOT`].
pub trait SparseKey: Copy {
    /// Slot of this key in the sparse table, or [`NO_SLOT`].
    fn to_index(self) -> usize;

    /// Key stored at sparse slot `index`.
    ///
    /// Only called with indices produced by [`to_index`](Self::to_index).
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_sparse_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SparseKey for $ty {
                #[inline]
                fn to_index(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_index(index: usize) -> Self {
                    index as $ty
                }
            }
        )*
    };
}

macro_rules! impl_signed_sparse_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SparseKey for $ty {
                #[inline]
                fn to_index(self) -> usize {
                    usize::try_from(self).unwrap_or(NO_SLOT)
                }

                #[inline]
                fn from_index(index: usize) -> Self {
                    index as $ty
                }
            }
        )*
    };
}

impl_sparse_key!(usize, u8, u16);
impl_signed_sparse_key!(isize, i8, i16, i32, i64);

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl_sparse_key!(u32);

#[cfg(target_pointer_width = "64")]
impl_sparse_key!(u64);
