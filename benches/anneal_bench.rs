//! Criterion benchmarks for the CVRP annealing solver.
//!
//! Uses synthetic instances (points on a jittered grid around the depot)
//! to measure construction and full annealing cycles.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cvrp_anneal::{build_initial, AnnealConfig, Annealer, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
                rng.random_range(1..=10),
            )
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n in &[50, 200, 1000] {
        let points = synthetic_points(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let built = build_initial(black_box(points), 10, 60, &mut rng);
                black_box(built)
            })
        });
    }
    group.finish();
}

fn bench_anneal_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_cycle");
    group.sample_size(10);

    for &n in &[25, 50, 100] {
        let points = synthetic_points(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let built = build_initial(black_box(points), 8, 50, &mut rng);
                let config = AnnealConfig::default()
                    .with_seed(42)
                    .with_iterations_per_call(5_000);
                let depot = Point::depot(0.0, 0.0);
                let mut annealer = Annealer::new(built.solution, depot, config).unwrap();
                annealer.run();
                black_box(annealer.best_cost())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_anneal_cycle);
criterion_main!(benches);
