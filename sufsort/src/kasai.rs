// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

/// Computes the LCP array of `text` from its suffix array using Kasai's algorithm.
///
/// `lcp[0]` is 0 and `lcp[i]` is the length of the longest common prefix of the suffixes at
/// `suffix_array[i - 1]` and `suffix_array[i]`.
///
/// Positions are visited in text order. Dropping the first symbol of a suffix shortens its match
/// with its predecessor by at most one, so the running match length is only ever decremented by
/// one between positions and the total number of symbol comparisons is *O*(*n*).
///
/// # Panics
///
/// Panics if `suffix_array` is not a permutation of the positions of `text`.
///
/// # Examples
///
/// ```
/// let text = b"banana";
/// let sa = sufsort::suffix_array(text)?;
///
/// assert_eq!(sufsort::lcp_array(text, &sa), [0, 1, 3, 0, 0, 2]);
/// # Ok::<(), sufsort::BuildError>(())
/// ```
#[must_use]
pub fn lcp_array<S: PartialEq>(text: &[S], suffix_array: &[u32]) -> Vec<u32> {
    let n = text.len();
    assert_eq!(
        suffix_array.len(),
        n,
        "suffix array and text must have the same length",
    );

    let mut inverse = vec![0u32; n];
    for (rank, &position) in suffix_array.iter().enumerate() {
        inverse[position as usize] = rank as u32;
    }

    let mut lcp = vec![0; n];
    let mut len = 0;
    for (i, &rank) in inverse.iter().enumerate() {
        let rank = rank as usize;
        if rank == 0 {
            // No predecessor to match against
            len = 0;
            continue;
        }

        let k = suffix_array[rank - 1] as usize;
        while i + len < n && k + len < n && text[i + len] == text[k + len] {
            len += 1;
        }
        lcp[rank] = len as u32;

        len = len.saturating_sub(1);
    }

    lcp
}
