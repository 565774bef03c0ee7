// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    mem,
    sync::atomic::{AtomicBool, Ordering},
};

use log::{debug, trace};

use crate::{BuildError, Symbol};

/// The smallest code range that is counting sorted directly, without compressing the alphabet
const MIN_BUCKETS: usize = 256;

/// A configurable suffix array constructor.
///
/// Suffixes are sorted by prefix doubling: after round `r`, positions are ranked by their prefixes
/// of length `2^r`, and every round re-sorts them by rank pairs with two stable counting sorts. A
/// suffix that ends inside a prefix sorts before every suffix that continues with a real symbol.
///
/// This operation is *O*(*n* log(*n*)) time and *O*(*n*) auxiliary space. Construction stops as
/// soon as all ranks are distinct, so texts with few repeats finish in few rounds.
///
/// # Examples
///
/// ```
/// use sufsort::SuffixArrayBuilder;
///
/// let sa = SuffixArrayBuilder::new().build(b"banana")?;
/// assert_eq!(sa, [5, 3, 1, 0, 4, 2]);
/// # Ok::<(), sufsort::BuildError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SuffixArrayBuilder<'c> {
    cancel: Option<&'c AtomicBool>,
}

impl<'c> SuffixArrayBuilder<'c> {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self { cancel: None }
    }

    /// Makes construction observe `flag`.
    ///
    /// The flag is checked once per doubling round. If it is set, [`build()`](Self::build) returns
    /// [`BuildError::Cancelled`].
    #[must_use]
    pub fn cancel_flag(self, flag: &'c AtomicBool) -> Self {
        Self { cancel: Some(flag) }
    }

    /// Builds the suffix array of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidInput`] if `text` is empty, [`BuildError::TextTooLong`] if it
    /// has more than `u32::MAX` positions, and [`BuildError::Cancelled`] if the cancellation flag
    /// was raised.
    pub fn build<S: Symbol>(&self, text: &[S]) -> Result<Vec<u32>, BuildError> {
        if text.is_empty() {
            return Err(BuildError::InvalidInput("empty text"));
        }
        let n = text.len();
        if u32::try_from(n).is_err() {
            return Err(BuildError::TextTooLong(n));
        }

        let (codes, alphabet_size) = initial_codes(text);
        debug!("sorting {n} suffixes over an alphabet of {alphabet_size} codes");

        // Round 0: order positions by their first symbol
        let identity: Vec<u32> = (0..n as u32).collect();
        let mut buckets = Vec::with_capacity(alphabet_size.min(n).max(MIN_BUCKETS));
        let mut suffix_array = vec![0; n];
        counting_sort(
            &identity,
            &codes,
            &mut buckets,
            alphabet_size,
            &mut suffix_array,
        );
        drop(identity);

        let mut rank = vec![0; n];
        let mut classes = rerank(&suffix_array, &mut rank, |a, b| codes[a] != codes[b]);
        drop(codes);

        let mut by_second = vec![0; n];
        let mut next_rank = vec![0; n];
        let mut p = 1;
        while classes < n && p < n {
            self.check_cancelled()?;

            // Order by the rank at offset p. Positions whose offset falls off the end come first;
            // the rest follow in the current suffix order shifted back by p.
            let mut k = 0;
            for i in (n - p)..n {
                by_second[k] = i as u32;
                k += 1;
            }
            for &i in &suffix_array {
                if i as usize >= p {
                    by_second[k] = i - p as u32;
                    k += 1;
                }
            }
            debug_assert_eq!(k, n, "every position must be placed exactly once");

            // Stable sort by the rank at offset 0
            counting_sort(&by_second, &rank, &mut buckets, classes, &mut suffix_array);

            classes = rerank(&suffix_array, &mut next_rank, |a, b| {
                rank[a] != rank[b] || rank.get(a + p) != rank.get(b + p)
            });
            mem::swap(&mut rank, &mut next_rank);

            trace!("doubling round p={p}: {classes} classes of {n}");
            p = p.saturating_mul(2);
        }

        Ok(suffix_array)
    }

    fn check_cancelled(&self) -> Result<(), BuildError> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(BuildError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Builds the suffix array of `text` with the default configuration.
///
/// # Errors
///
/// See [`SuffixArrayBuilder::build()`].
pub fn suffix_array<S: Symbol>(text: &[S]) -> Result<Vec<u32>, BuildError> {
    SuffixArrayBuilder::new().build(text)
}

/// Maps `text` to `u32` codes, returning them with the size of the code range.
///
/// Code ranges wider than `max(n, 256)` are compressed to dense ranks so the bucket array stays
/// linear in the text length.
fn initial_codes<S: Symbol>(text: &[S]) -> (Vec<u32>, usize) {
    let limit = text.len().max(MIN_BUCKETS);
    let max_code = text.iter().map(|s| s.code()).max().unwrap_or(0);

    if max_code < limit {
        let codes = text.iter().map(|s| s.code() as u32).collect();
        (codes, max_code + 1)
    } else {
        let mut alphabet: Vec<S> = text.to_vec();
        alphabet.sort_unstable();
        alphabet.dedup();
        let codes = text
            .iter()
            .map(|s| alphabet.partition_point(|a| a < s) as u32)
            .collect();
        (codes, alphabet.len())
    }
}

/// Stably sorts the positions in `order` by `key` into `out`.
///
/// Every key must be below `classes`.
fn counting_sort(
    order: &[u32],
    key: &[u32],
    buckets: &mut Vec<u32>,
    classes: usize,
    out: &mut [u32],
) {
    buckets.clear();
    buckets.resize(classes, 0);

    for &i in order {
        buckets[key[i as usize] as usize] += 1;
    }

    // Bucket starts
    let mut sum = 0;
    for bucket in buckets.iter_mut() {
        let count = *bucket;
        *bucket = sum;
        sum += count;
    }

    for &i in order {
        let bucket = &mut buckets[key[i as usize] as usize];
        out[*bucket as usize] = i;
        *bucket += 1;
    }
}

/// Assigns dense ranks in suffix array order, starting a new class wherever `differs` reports
/// that two neighboring positions differ. Returns the number of classes.
fn rerank(
    suffix_array: &[u32],
    rank: &mut [u32],
    differs: impl Fn(usize, usize) -> bool,
) -> usize {
    let mut class = 0;
    rank[suffix_array[0] as usize] = 0;
    for w in suffix_array.windows(2) {
        let (prev, cur) = (w[0] as usize, w[1] as usize);
        if differs(prev, cur) {
            class += 1;
        }
        rank[cur] = class;
    }

    class as usize + 1
}
