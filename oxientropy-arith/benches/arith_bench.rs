//! Performance benchmarks for oxientropy-arith
//!
//! Covers compression and decompression throughput across data patterns
//! with very different entropy.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxientropy_arith::{compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Random data - close to 8 bits of entropy per byte
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Heavily skewed two-symbol data
    pub fn skewed(size: usize) -> Vec<u8> {
        (0..size).map(|i| if i % 64 == 0 { 1 } else { 0 }).collect()
    }
}

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("random", test_data::random),
    ("text", test_data::text_like),
    ("skewed", test_data::skewed),
];

const SIZE: usize = 64 * 1024;

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_compress");

    for (name, generator) in PATTERNS {
        let data = generator(SIZE);
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_decompress");

    for (name, generator) in PATTERNS {
        let compressed = compress(&generator(SIZE)).unwrap();
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &compressed, |b, data| {
            b.iter(|| black_box(decompress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
