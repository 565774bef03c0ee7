// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{cmp::Ordering, collections::BTreeSet, ops::Range};

use crate::{BuildError, Symbol, SuffixArrayBuilder, lcp_array};

/// A suffix array and LCP array for a text.
///
/// The arrays are built once by [`new()`](Self::new) and are read-only afterwards, so a
/// `SuffixArray` can be shared between threads for concurrent queries.
#[derive(Debug, Clone)]
pub struct SuffixArray<'a, S = u8> {
    data: &'a [S],
    inner: Vec<u32>,
    lcp: Vec<u32>,
}

impl<'a> SuffixArray<'a, u8> {
    /// Creates a new `SuffixArray` for the bytes of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidInput`] if `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let sa = SuffixArray::from_str("banana")?;
    /// assert_eq!(sa.suffix_array(), [5, 3, 1, 0, 4, 2]);
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str) -> Result<Self, BuildError> {
        Self::new(text.as_bytes())
    }
}

impl<'a, S: Symbol> SuffixArray<'a, S> {
    /// Creates a new `SuffixArray` for `data`.
    ///
    /// This operation is *O*(*n* log(*n*)).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidInput`] if `data` is empty and [`BuildError::TextTooLong`] if
    /// `data.len() > u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data)?;
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    pub fn new(data: &'a [S]) -> Result<Self, BuildError> {
        Self::with_builder(data, &SuffixArrayBuilder::new())
    }

    /// Creates a new `SuffixArray` for `data` using a configured `builder`.
    ///
    /// # Errors
    ///
    /// Returns any error [`SuffixArrayBuilder::build()`] returns.
    pub fn with_builder(data: &'a [S], builder: &SuffixArrayBuilder) -> Result<Self, BuildError> {
        let inner = builder.build(data)?;
        let lcp = lcp_array(data, &inner);

        Ok(Self { data, inner, lcp })
    }

    /// Returns the text this suffix array was built for.
    #[must_use]
    pub fn text(&self) -> &'a [S] {
        self.data
    }

    /// Returns the starting positions of all suffixes in lexicographic order.
    #[must_use]
    pub fn suffix_array(&self) -> &[u32] {
        &self.inner
    }

    /// Returns the longest common prefix of every suffix with its predecessor in suffix order.
    #[must_use]
    pub fn lcp(&self) -> &[u32] {
        &self.lcp
    }

    /// Returns the length of the text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`: empty texts are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if and only if `pattern` is contained in the associated data.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let data = b"Hello, world!";
    /// let sa = SuffixArray::new(data)?;
    /// assert!(sa.contains(b"world"));
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[S]) -> bool {
        self.inner
            .binary_search_by(|&suffix| self.compare_prefix(suffix, pattern))
            .is_ok()
    }

    /// Returns the starting position of the lexicographically smallest suffix that begins with
    /// `pattern`, or `None` if `pattern` doesn't occur.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidInput`] if `pattern` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let sa = SuffixArray::from_str("banana")?;
    /// assert_eq!(sa.find(b"ana")?, Some(1));
    /// assert_eq!(sa.find(b"nab")?, None);
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    pub fn find(&self, pattern: &[S]) -> Result<Option<usize>, BuildError> {
        if pattern.is_empty() {
            return Err(BuildError::InvalidInput("empty pattern"));
        }

        let range = self.matching_range(pattern);
        Ok((!range.is_empty()).then(|| self.inner[range.start] as usize))
    }

    /// Returns the starting positions of every occurrence of `pattern`, in ascending order.
    ///
    /// An empty pattern occurs at every position.
    #[must_use]
    pub fn find_all(&self, pattern: &[S]) -> Vec<usize> {
        let mut positions: Vec<usize> = self.inner[self.matching_range(pattern)]
            .iter()
            .map(|&p| p as usize)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Returns every longest substring that occurs at least twice, without duplicates and in
    /// ascending order.
    ///
    /// The result is empty if no symbol repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// let sa = SuffixArray::from_str("abracadabra")?;
    /// assert_eq!(sa.longest_repeated_substrings(), [b"abra"]);
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    #[must_use]
    pub fn longest_repeated_substrings(&self) -> Vec<&'a [S]> {
        let longest = self.lcp.iter().copied().max().unwrap_or(0) as usize;
        if longest == 0 {
            return Vec::new();
        }

        let repeats: BTreeSet<&'a [S]> = self
            .lcp
            .iter()
            .zip(&self.inner)
            .filter(|&(&len, _)| len as usize == longest)
            .map(|(_, &start)| &self.data[start as usize..start as usize + longest])
            .collect();

        repeats.into_iter().collect()
    }

    /// Returns the number of distinct non-empty substrings of the text.
    ///
    /// Every suffix contributes the prefixes it doesn't share with its predecessor, so the count
    /// is `n(n + 1) / 2` minus the sum of the LCP array.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufsort::SuffixArray;
    ///
    /// // a, b, n, an, ba, na, ana, ban, nan, anan, bana, nana, anana, banan, banana
    /// let sa = SuffixArray::from_str("banana")?;
    /// assert_eq!(sa.unique_substring_count(), 15);
    /// # Ok::<(), sufsort::BuildError>(())
    /// ```
    #[must_use]
    pub fn unique_substring_count(&self) -> u64 {
        let n = self.data.len() as u64;
        let shared: u64 = self.lcp.iter().map(|&len| u64::from(len)).sum();

        n * (n + 1) / 2 - shared
    }

    /// Returns the range of suffix array indices whose suffixes begin with `pattern`.
    fn matching_range(&self, pattern: &[S]) -> Range<usize> {
        let start = self
            .inner
            .partition_point(|&suffix| self.compare_prefix(suffix, pattern) == Ordering::Less);
        let end = start
            + self.inner[start..]
                .partition_point(|&suffix| self.compare_prefix(suffix, pattern) == Ordering::Equal);

        start..end
    }

    /// Compares the prefix of the suffix at `suffix` of length `pattern.len()` with `pattern`.
    fn compare_prefix(&self, suffix: u32, pattern: &[S]) -> Ordering {
        self.data[suffix as usize..]
            .iter()
            .take(pattern.len())
            .cmp(pattern.iter())
    }
}
