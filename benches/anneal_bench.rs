//! Criterion benchmarks for the annealing loop.
//!
//! Uses seeded random instances so timings measure pure loop overhead on
//! stable inputs, independent of solution quality.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_anneal::point::Point;
use tsp_anneal::sa::{InverseSquare, SaConfig, SaRunner};

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(1.0..=10.0),
                rng.random_range(1.0..=10.0),
            )
        })
        .collect()
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_tsp");
    let fitness = InverseSquare::default();
    let config = SaConfig::default().with_iterations(1000).with_seed(42);

    for &size in &[15usize, 50, 100] {
        let points = random_points(size, 123);
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| SaRunner::run(black_box(points), &fitness, &config).expect("valid input"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_annealing);
criterion_main!(benches);
