//! Benchmarks for caesarbreak key search.
//!
//! Measures single-pass scoring, full sequential and parallel searches, and
//! how search time scales with ciphertext length.

use caesarbreak::encode;
use caesarbreak::frequency::FrequencyTable;
use caesarbreak::key_search::KeySearch;
use caesarbreak::scorer::{FrequencyScorer, Scorer};
use caesarbreak::simulation::generate_plain_text;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used for every generated plaintext.
const BENCH_SEED: u64 = 2024;

/// Key used to encrypt benchmark plaintexts.
const BENCH_SHIFT: i64 = 11;

fn cipher_text(length: usize) -> String {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let plain = generate_plain_text(length, &FrequencyTable::english(), &mut rng);
    encode(&plain, BENCH_SHIFT)
}

/// Benchmarks one scoring pass over 1000 letters.
fn bench_score(c: &mut Criterion) {
    let scorer = FrequencyScorer::default();
    let text = cipher_text(1000);

    let mut group = c.benchmark_group("score");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("1000_letters", |b| {
        b.iter(|| scorer.score(black_box(&text)));
    });
    group.finish();
}

/// Benchmarks sequential against parallel search over 10000 letters.
fn bench_search(c: &mut Criterion) {
    let search = KeySearch::new(FrequencyScorer::default());
    let text = cipher_text(10_000);

    let mut group = c.benchmark_group("search_10000_letters");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| search.search(black_box(&text)));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| search.search_parallel(black_box(&text)));
    });
    group.finish();
}

/// Benchmarks search time across ciphertext lengths.
///
/// Time per byte should stay flat if the search is linear in length.
fn bench_search_length_scaling(c: &mut Criterion) {
    let lengths: &[usize] = &[1000, 5000, 10_000];
    let search = KeySearch::new(FrequencyScorer::default());

    let mut group = c.benchmark_group("search_length_scaling");
    for &length in lengths {
        let text = cipher_text(length);
        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &text, |b, text| {
            b.iter(|| search.search(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_score,
    bench_search,
    bench_search_length_scaling,
);
criterion_main!(benches);
