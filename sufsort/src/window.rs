// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::collections::VecDeque;

/// The longest length shared by suffixes from at least `k` colors, and the suffixes that start
/// each maximal window.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CommonMatches {
    pub(crate) len: usize,
    pub(crate) starts: Vec<usize>,
}

/// Slides a window over the suffix array to find the longest prefixes shared by suffixes of at
/// least `k` distinct colors.
///
/// The first `texts` suffixes start at sentinels and are skipped. The window grows until it covers
/// `k` colors, then shrinks from the left, recording the minimum LCP inside it at each step. A
/// window `[lo, hi)` shares the prefix of length `min(lcp[lo + 1..hi])`.
pub(crate) fn longest_common(
    suffix_array: &[u32],
    lcp: &[u32],
    colors: &[u32],
    texts: usize,
    k: usize,
) -> CommonMatches {
    let n = suffix_array.len();
    let color_of = |i: usize| colors[suffix_array[i] as usize] as usize;

    let mut best = CommonMatches::default();
    let mut counts = ColorCounts::new(texts);
    let mut min_lcp = MinWindow::new();
    let (mut lo, mut hi) = (texts, texts);

    loop {
        if counts.distinct >= k {
            let len = min_lcp.min(lcp).unwrap_or(0) as usize;
            if len > 0 && len >= best.len {
                if len > best.len {
                    best.len = len;
                    best.starts.clear();
                }
                best.starts.push(suffix_array[lo] as usize);
            }

            counts.remove(color_of(lo));
            lo += 1;
            min_lcp.retire(lo);
        } else if hi < n {
            counts.add(color_of(hi));
            if hi > lo {
                min_lcp.push(hi, lcp);
            }
            hi += 1;
        } else {
            break;
        }
    }

    best
}

/// The number of window positions of each color.
struct ColorCounts {
    counts: Vec<usize>,
    distinct: usize,
}

impl ColorCounts {
    fn new(colors: usize) -> Self {
        Self {
            counts: vec![0; colors],
            distinct: 0,
        }
    }

    fn add(&mut self, color: usize) {
        if self.counts[color] == 0 {
            self.distinct += 1;
        }
        self.counts[color] += 1;
    }

    fn remove(&mut self, color: usize) {
        self.counts[color] -= 1;
        if self.counts[color] == 0 {
            self.distinct -= 1;
        }
    }
}

/// A monotonic deque of LCP indices answering sliding-window minimum queries in amortized *O*(1).
///
/// Values at the stored indices increase from front to back, so the front is the minimum.
struct MinWindow {
    indices: VecDeque<usize>,
}

impl MinWindow {
    fn new() -> Self {
        Self {
            indices: VecDeque::new(),
        }
    }

    fn push(&mut self, index: usize, lcp: &[u32]) {
        while self.indices.back().is_some_and(|&back| lcp[back] >= lcp[index]) {
            self.indices.pop_back();
        }
        self.indices.push_back(index);
    }

    /// Drops indices at or before `lo`, which no longer lie strictly inside the window.
    fn retire(&mut self, lo: usize) {
        while self.indices.front().is_some_and(|&front| front <= lo) {
            self.indices.pop_front();
        }
    }

    fn min(&self, lcp: &[u32]) -> Option<u32> {
        self.indices.front().map(|&i| lcp[i])
    }
}
