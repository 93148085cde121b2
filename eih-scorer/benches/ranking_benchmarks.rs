//! Criterion benchmarks for candidate ranking.
//!
//! Measures `get_top_locations` across batch sizes (100, 1 000, 10 000
//! candidates) with a seeded sampler so runs are comparable.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package eih-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eih_core::{DemographicDataset, DemographicRecord, Location};
use eih_scorer::{DEFAULT_TOP_N, NearestTract, RandomSample, SiteScorer};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Seed for deterministic random number generation in benchmarks.
const BENCHMARK_SEED: u64 = 42;

/// Batch sizes to benchmark.
const BATCH_SIZES: &[usize] = &[100, 1_000, 10_000];

/// Number of synthetic census tracts.
const TRACT_COUNT: usize = 400;

/// Spread of candidates around downtown San Jose, in degrees (~5.5 km).
const CANDIDATE_SPREAD: f64 = 0.05;

#[expect(
    clippy::expect_used,
    reason = "benchmark setup should fail fast on a bad distribution"
)]
fn generate_candidates(count: usize, rng: &mut ChaCha8Rng) -> Vec<Location> {
    let latitude = Normal::new(37.3382, CANDIDATE_SPREAD).expect("valid latitude spread");
    let longitude = Normal::new(-121.8863, CANDIDATE_SPREAD).expect("valid longitude spread");
    (0..count)
        .map(|_| Location::new(latitude.sample(rng), longitude.sample(rng)))
        .collect()
}

fn generate_dataset(rng: &mut ChaCha8Rng) -> DemographicDataset {
    (0..TRACT_COUNT)
        .map(|tract| {
            let centroid = Location::new(rng.gen_range(37.1..37.5), rng.gen_range(-122.1..-121.6));
            DemographicRecord::new(
                rng.gen_range(500.0..15_000.0),
                rng.gen_range(0.0..45.0),
                rng.gen_range(0.0..100.0),
            )
            .with_tract(format!("{tract:04}"), centroid)
        })
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(BENCHMARK_SEED);
    let dataset = generate_dataset(&mut rng);
    let mut group = c.benchmark_group("get_top_locations");

    for &size in BATCH_SIZES {
        let candidates = generate_candidates(size, &mut rng);
        group.throughput(Throughput::Elements(
            u64::try_from(size).unwrap_or(u64::MAX),
        ));

        let sampled = SiteScorer::with_defaults().with_lookup(RandomSample::seeded(BENCHMARK_SEED));
        group.bench_with_input(BenchmarkId::new("random_sample", size), &candidates, |b, batch| {
            b.iter(|| sampled.get_top_locations(batch, &dataset, DEFAULT_TOP_N));
        });

        let joined = SiteScorer::with_defaults().with_lookup(NearestTract);
        group.bench_with_input(BenchmarkId::new("nearest_tract", size), &candidates, |b, batch| {
            b.iter(|| joined.get_top_locations(batch, &dataset, DEFAULT_TOP_N));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
