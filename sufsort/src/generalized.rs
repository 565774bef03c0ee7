// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::collections::BTreeSet;

use log::debug;

use crate::{BuildError, Symbol, SuffixArrayBuilder, lcp_array, window};

/// A suffix array over several texts.
///
/// The texts are joined into one text, each followed by its own sentinel. Sentinel `j` has code
/// `j` and every real symbol is shifted up by the number of texts, so sentinels are distinct from
/// each other and sort below every real symbol. No common prefix can therefore extend across the
/// end of a text.
///
/// Every position of the joined text, sentinels included, is colored with the index of the text
/// it belongs to. The suffix array, LCP array and colors are index-aligned and read-only.
///
/// # Examples
///
/// ```
/// use sufsort::GeneralizedSuffixArray;
///
/// let texts: [&[u8]; 2] = [b"ab", b"b"];
/// let gsa = GeneralizedSuffixArray::new(&texts)?;
///
/// // "ab", sentinel 0, "b", sentinel 1
/// assert_eq!(gsa.len(), 5);
/// assert_eq!(gsa.suffix_array(), [2, 4, 0, 1, 3]);
/// assert_eq!(gsa.color(3), 1);
/// # Ok::<(), sufsort::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixArray<'a, S = u8> {
    texts: Vec<&'a [S]>,
    starts: Vec<usize>,
    inner: Vec<u32>,
    lcp: Vec<u32>,
    colors: Vec<u32>,
}

impl<'a, S: Symbol> GeneralizedSuffixArray<'a, S> {
    /// Creates a new `GeneralizedSuffixArray` for `texts`.
    ///
    /// This operation is *O*(*n* log(*n*)), where `n` is the total length of the texts plus one
    /// sentinel per text.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::TooFewTexts`] if fewer than two texts are given.
    pub fn new(texts: &[&'a [S]]) -> Result<Self, BuildError> {
        Self::with_builder(texts, &SuffixArrayBuilder::new())
    }

    /// Creates a new `GeneralizedSuffixArray` for `texts` using a configured `builder`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::TooFewTexts`] if fewer than two texts are given,
    /// [`BuildError::InvalidInput`] if a symbol code can't be shifted past the sentinels, and any
    /// error [`SuffixArrayBuilder::build()`] returns.
    pub fn with_builder(
        texts: &[&'a [S]],
        builder: &SuffixArrayBuilder,
    ) -> Result<Self, BuildError> {
        let count = texts.len();
        if count < 2 {
            return Err(BuildError::TooFewTexts(count));
        }

        let total = texts.iter().map(|text| text.len() + 1).sum::<usize>();
        if u32::try_from(total).is_err() {
            return Err(BuildError::TextTooLong(total));
        }

        let mut joined = Vec::with_capacity(total);
        let mut colors = Vec::with_capacity(total);
        let mut starts = Vec::with_capacity(count);
        for (color, text) in texts.iter().enumerate() {
            starts.push(joined.len());
            for symbol in text.iter() {
                let code = symbol.code().checked_add(count).ok_or(BuildError::InvalidInput(
                    "symbol code too large to shift past the sentinels",
                ))?;
                joined.push(code);
            }
            joined.push(color);
            colors.resize(joined.len(), color as u32);
        }
        debug!("joined {count} texts into {total} positions");

        let inner = builder.build(&joined)?;
        let lcp = lcp_array(&joined, &inner);

        Ok(Self {
            texts: texts.to_vec(),
            starts,
            inner,
            lcp,
            colors,
        })
    }

    /// Returns the starting positions of all suffixes of the joined text in lexicographic order.
    ///
    /// The first [`text_count()`](Self::text_count) entries are the sentinel positions.
    #[must_use]
    pub fn suffix_array(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the longest common prefix of every suffix with its predecessor in suffix order.
    #[must_use]
    pub fn lcp(&self) -> &[u32] {
        &self.lcp
    }

    /// Returns the index of the text that `position` of the joined text belongs to.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    #[must_use]
    pub fn color(&self, position: usize) -> usize {
        self.colors[position] as usize
    }

    /// Returns the color of every position of the joined text.
    #[must_use]
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Returns the number of texts.
    #[must_use]
    pub fn text_count(&self) -> usize {
        self.texts.len()
    }

    /// Returns the length of the joined text, sentinels included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always returns `false`: the joined text holds at least two sentinels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns every longest substring that occurs in at least `k` of the texts, without
    /// duplicates and in ascending order.
    ///
    /// The result is empty if no symbol is shared by `k` texts.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidArgument`] unless `2 <= k <= self.text_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::GeneralizedSuffixArray;
    ///
    /// let texts: [&[u8]; 3] = [b"abcde", b"habcab", b"ghabcdf"];
    /// let gsa = GeneralizedSuffixArray::new(&texts)?;
    ///
    /// assert_eq!(gsa.longest_common_substrings(3)?, [b"abc"]);
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    pub fn longest_common_substrings(&self, k: usize) -> Result<Vec<&'a [S]>, BuildError> {
        let texts = self.text_count();
        if !(2..=texts).contains(&k) {
            return Err(BuildError::InvalidArgument { k, texts });
        }

        let matches = window::longest_common(&self.inner, &self.lcp, &self.colors, texts, k);
        let substrings: BTreeSet<&'a [S]> = matches
            .starts
            .iter()
            .map(|&start| self.substring(start, matches.len))
            .collect();
        debug!(
            "longest substrings common to {k} of {texts} texts: length {}, {} distinct",
            matches.len,
            substrings.len(),
        );

        Ok(substrings.into_iter().collect())
    }

    /// Returns the `len` symbols of the original text starting at `position` of the joined text.
    fn substring(&self, position: usize, len: usize) -> &'a [S] {
        let color = self.color(position);
        let offset = position - self.starts[color];

        &self.texts[color][offset..offset + len]
    }
}

/// Returns every longest substring that occurs in at least `k` of `texts`.
///
/// # Errors
///
/// Returns [`BuildError::TooFewTexts`] if fewer than two texts are given and
/// [`BuildError::InvalidArgument`] unless `2 <= k <= texts.len()`.
///
/// # Examples
///
/// ```
/// let texts: [&[u8]; 4] = [b"AABC", b"BCDC", b"BCDE", b"CDED"];
///
/// assert_eq!(
///     sufsort::longest_common_substrings(&texts, 2)?,
///     [b"BCD", b"CDE"],
/// );
/// # Ok::<(), sufsort::BuildError>(())
/// ```
pub fn longest_common_substrings<'a, S: Symbol>(
    texts: &[&'a [S]],
    k: usize,
) -> Result<Vec<&'a [S]>, BuildError> {
    if texts.len() >= 2 && !(2..=texts.len()).contains(&k) {
        return Err(BuildError::InvalidArgument {
            k,
            texts: texts.len(),
        });
    }

    GeneralizedSuffixArray::new(texts)?.longest_common_substrings(k)
}
