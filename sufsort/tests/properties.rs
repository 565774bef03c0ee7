// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use sufsort::{GeneralizedSuffixArray, SuffixArray};

/// Texts over a small alphabet so that repeats are common
fn text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'd', 1..200)
}

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn naive_suffix_array(text: &[u8]) -> Vec<u32> {
    let mut sa: Vec<u32> = (0..text.len() as u32).collect();
    sa.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    sa
}

fn naive_common_substrings(texts: &[Vec<u8>], k: usize) -> BTreeSet<Vec<u8>> {
    let mut best = BTreeSet::new();
    let mut best_len = 0;
    let candidates: BTreeSet<&[u8]> = texts
        .iter()
        .flat_map(|t| (0..t.len()).flat_map(move |i| (i + 1..=t.len()).map(move |j| &t[i..j])))
        .collect();

    for candidate in candidates {
        let shared = texts
            .iter()
            .filter(|t| t.windows(candidate.len()).any(|w| w == candidate))
            .count();
        if shared >= k && candidate.len() >= best_len {
            if candidate.len() > best_len {
                best_len = candidate.len();
                best.clear();
            }
            best.insert(candidate.to_vec());
        }
    }

    best
}

proptest! {
    #[test]
    fn suffix_array_is_sorted_permutation(text in text()) {
        let sa = SuffixArray::new(&text).unwrap();

        let mut positions = sa.suffix_array().to_vec();
        positions.sort_unstable();
        prop_assert!(positions.iter().copied().eq(0..text.len() as u32));

        for w in sa.suffix_array().windows(2) {
            prop_assert!(text[w[0] as usize..] < text[w[1] as usize..]);
        }
    }

    #[test]
    fn suffix_array_matches_naive(text in text()) {
        let sa = SuffixArray::new(&text).unwrap();
        let expected = naive_suffix_array(&text);

        prop_assert_eq!(sa.suffix_array(), expected.as_slice());
    }

    #[test]
    fn lcp_is_literal_common_prefix(text in text()) {
        let sa = SuffixArray::new(&text).unwrap();
        let (order, lcp) = (sa.suffix_array(), sa.lcp());

        prop_assert_eq!(lcp.len(), text.len());
        prop_assert_eq!(lcp[0], 0);
        for i in 1..order.len() {
            let (prev, cur) = (order[i - 1] as usize, order[i] as usize);
            prop_assert_eq!(lcp[i] as usize, common_prefix(&text[prev..], &text[cur..]));
            prop_assert!(lcp[i] as usize <= (text.len() - prev).min(text.len() - cur));
        }
    }

    #[test]
    fn suffix_array_round_trips_text(text in text()) {
        let sa = SuffixArray::new(&text).unwrap();

        let mut positions = sa.suffix_array().to_vec();
        positions.sort_unstable();
        let rebuilt: Vec<u8> = positions.iter().map(|&p| text[p as usize]).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn construction_is_deterministic(text in text()) {
        let first = SuffixArray::new(&text).unwrap();
        let second = SuffixArray::new(&text).unwrap();

        prop_assert_eq!(first.suffix_array(), second.suffix_array());
        prop_assert_eq!(first.lcp(), second.lcp());
    }

    #[test]
    fn unique_substring_count_matches_naive(text in prop::collection::vec(b'a'..=b'c', 1..60)) {
        let sa = SuffixArray::new(&text).unwrap();
        let distinct: BTreeSet<&[u8]> = (0..text.len())
            .flat_map(|i| (i + 1..=text.len()).map(move |j| (i, j)))
            .map(|(i, j)| &text[i..j])
            .collect();

        prop_assert_eq!(sa.unique_substring_count(), distinct.len() as u64);
    }

    #[test]
    fn find_reports_real_occurrences(
        text in text(),
        pattern in prop::collection::vec(b'a'..=b'd', 1..4),
    ) {
        let sa = SuffixArray::new(&text).unwrap();
        let expected: Vec<usize> = text
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern.as_slice())
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(sa.find_all(&pattern), expected.clone());
        prop_assert_eq!(sa.contains(&pattern), !expected.is_empty());
        match sa.find(&pattern).unwrap() {
            Some(start) => prop_assert!(expected.contains(&start)),
            None => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn longest_common_substrings_match_naive(
        texts in prop::collection::vec(prop::collection::vec(b'a'..=b'c', 0..12), 2..5),
        k in 2usize..5,
    ) {
        prop_assume!(k <= texts.len());
        let slices: Vec<&[u8]> = texts.iter().map(Vec::as_slice).collect();
        let gsa = GeneralizedSuffixArray::new(&slices).unwrap();

        let found: BTreeSet<Vec<u8>> = gsa
            .longest_common_substrings(k)
            .unwrap()
            .into_iter()
            .map(<[u8]>::to_vec)
            .collect();
        prop_assert_eq!(found, naive_common_substrings(&texts, k));
    }

    #[test]
    fn generalized_colors_follow_texts(
        texts in prop::collection::vec(prop::collection::vec(b'a'..=b'c', 0..12), 2..5),
    ) {
        let slices: Vec<&[u8]> = texts.iter().map(Vec::as_slice).collect();
        let gsa = GeneralizedSuffixArray::new(&slices).unwrap();

        let mut position = 0;
        for (color, text) in texts.iter().enumerate() {
            for _ in 0..=text.len() {
                prop_assert_eq!(gsa.color(position), color);
                position += 1;
            }
        }
        prop_assert_eq!(position, gsa.len());
        prop_assert_eq!(gsa.lcp().len(), gsa.len());
    }
}
