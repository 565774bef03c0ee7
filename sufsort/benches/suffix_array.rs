// Copyright 2023-2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha20Rng;
use sufsort::{GeneralizedSuffixArray, SuffixArray};

const SIZES: [usize; 4] = [1 << 10, 1 << 13, 1 << 16, 1 << 19];

/// Generates `len` bytes from a four-letter alphabet with a fixed seed
fn dna(len: usize) -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(0x2545_f491_4f6c_dd1d);
    (0..len)
        .map(|_| *b"ACGT".choose(&mut rng).unwrap())
        .collect()
}

fn construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    for size in SIZES {
        let random = dna(size);
        // Highly repetitive input needs the most doubling rounds
        let periodic: Vec<u8> = b"abaababa".iter().copied().cycle().take(size).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, data| {
            b.iter(|| SuffixArray::new(data).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("periodic", size), &periodic, |b, data| {
            b.iter(|| SuffixArray::new(data).unwrap());
        });
    }

    group.finish();
}

fn lcp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcp");

    for size in SIZES {
        let data = dna(size);
        let sa = sufsort::suffix_array(&data).unwrap();

        group
            .throughput(Throughput::Bytes(size as u64))
            .bench_with_input(BenchmarkId::from_parameter(size), &sa, |b, sa| {
                b.iter(|| sufsort::lcp_array(&data, sa));
            });
    }

    group.finish();
}

fn common_substrings(c: &mut Criterion) {
    let mut group = c.benchmark_group("common_substrings");

    for size in SIZES {
        let data = dna(size * 4);
        let texts: Vec<&[u8]> = data.chunks(size).collect();
        let gsa = GeneralizedSuffixArray::new(&texts).unwrap();

        group
            .throughput(Throughput::Bytes((size * 4) as u64))
            .bench_with_input(BenchmarkId::from_parameter(size), &gsa, |b, gsa| {
                b.iter(|| gsa.longest_common_substrings(3).unwrap());
            });
    }

    group.finish();
}

criterion_group!(benches, construct, lcp, common_substrings);
criterion_main!(benches);
