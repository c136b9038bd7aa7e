//! Criterion benchmarks for matrix derivation and ranking queries.
//!
//! Measures user-similarity derivation and the collaborative and context
//! query paths across user-base and catalogue sizes to track ranking
//! performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package bazaar-recommender
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use bazaar_core::test_support::MemoryCatalog;
use bazaar_core::{ContextDescriptor, Device, FeatureMatrix, Season, pairwise_cosine};
use bazaar_recommender::RecommendationEngine;
use bazaar_scorer::{CollaborativeParams, CollaborativeScorer};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};


use bench_support::{BENCHMARK_SEED, generate_catalog, generate_interactions};

/// User-base sizes to benchmark.
const USER_COUNTS: &[usize] = &[50, 100, 200];

/// Catalogue sizes for the context ranking benchmark.
const CATALOG_SIZES: &[usize] = &[100, 500];

/// Item columns in generated interaction matrices.
const ITEM_COUNT: usize = 20;

/// Benchmark deriving the user-similarity matrix from interactions.
///
/// This is the engine's construction cost, so it bounds how often a
/// deployment can refresh its snapshot.
fn bench_similarity_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity_derivation");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for &users in USER_COUNTS {
        let interactions = generate_interactions(users, ITEM_COUNT, BENCHMARK_SEED);

        group.throughput(Throughput::Elements(u64::try_from(users).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::new("users", users), &users, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "benchmark measures derivation time; the matrix is discarded"
                )]
                let _ = pairwise_cosine(interactions.vectors());
            });
        });
    }

    group.finish();
}

/// Benchmark a single collaborative query against a derived snapshot.
fn bench_collaborative_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("collaborative_query");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for &users in USER_COUNTS {
        let interactions = generate_interactions(users, ITEM_COUNT, BENCHMARK_SEED);
        let similarity = pairwise_cosine(interactions.vectors());
        let scorer = CollaborativeScorer::new(&interactions, &similarity);
        let params = CollaborativeParams::default();

        group.throughput(Throughput::Elements(u64::try_from(users).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::new("users", users), &users, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "benchmark measures query time; the list is discarded"
                )]
                let _ = scorer.recommend("user_0", &params);
            });
        });
    }

    group.finish();
}

/// Benchmark ranking a whole catalogue for one context.
fn bench_context_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("context_ranking");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for &size in CATALOG_SIZES {
        let catalog = MemoryCatalog::with_items(generate_catalog(size));
        let interactions = generate_interactions(3, ITEM_COUNT, BENCHMARK_SEED);
        let vectors = FeatureMatrix::from_rows([])
            .unwrap_or_else(|err| panic!("empty matrix is valid: {err}"));
        let engine = RecommendationEngine::new(catalog, interactions, vectors);
        let context = ContextDescriptor::new()
            .with_device(Device::Mobile)
            .with_location("urban")
            .with_season(Season::Winter);

        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::new("items", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "benchmark measures ranking time; the list is discarded"
                )]
                let _ = engine.recommendations_in_context("user_0", &context, 10);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_similarity_derivation,
    bench_collaborative_queries,
    bench_context_ranking
);
criterion_main!(benches);
