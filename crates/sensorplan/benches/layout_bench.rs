//! Criterion benchmarks for the layout solver.
//! Focus: solve over the built-in catalog, and placement expansion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sensorplan::layout::{catalog, solve, LayoutRequest, Overlap};

fn bench_solve(c: &mut Criterion) {
    let types = catalog::builtin();
    let mut group = c.benchmark_group("layout");
    for &side in &[5.0f64, 20.0, 100.0] {
        let req = LayoutRequest::new(side, side * 0.75, 3.0, Overlap::from_fraction(0.1).unwrap());
        group.bench_with_input(BenchmarkId::new("solve", side), &req, |b, req| {
            b.iter(|| solve(req, &types).unwrap())
        });
        let cfg = solve(&req, &types).unwrap();
        group.bench_with_input(BenchmarkId::new("placements", side), &cfg, |b, cfg| {
            b.iter(|| cfg.placements())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
