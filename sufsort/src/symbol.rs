// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// A symbol of a text that can be suffix sorted.
///
/// The integer returned by [`code()`](Symbol::code) seeds the first counting sort of the
/// construction, so it must preserve the order of the symbols: for any two symbols `a` and `b`,
/// `a < b` if and only if `a.code() < b.code()`.
///
/// Codes don't need to be dense. Sparse alphabets are compressed to dense ranks before sorting.
pub trait Symbol: Copy + Ord {
    /// Returns the order-preserving integer code of this symbol.
    fn code(self) -> usize;
}

macro_rules! impl_symbol_lossless {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                #[inline]
                fn code(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

// u32 -> usize is lossless on every target this crate builds for (see lib.rs).
impl_symbol_lossless!(u8, u16, u32, usize);

impl Symbol for char {
    #[inline]
    fn code(self) -> usize {
        u32::from(self) as usize
    }
}
