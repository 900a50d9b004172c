/// Conjunction statistic benchmarks
///
/// Measures the full compute path (stable sort, ranking, window sums) and
/// the ranking step on its own across input sizes.
use conjtest::conjunction::{compute, descending_ranks};
use conjtest::{Point, PointSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Deterministic scattered points with plenty of tied y-values
fn scattered(n: u64) -> PointSet {
    let points = (0..n)
        .map(|i| Point::new((i * 7919) % n, (i * 104_729) % 97))
        .collect();
    PointSet::new(points).expect("benchmark sizes are above the minimum")
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for size in [9u64, 100, 1_000, 10_000] {
        let set = scattered(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &set, |b, set| {
            b.iter(|| compute(black_box(set)));
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("descending_ranks");

    for size in [100u64, 10_000] {
        let ys: Vec<u64> = scattered(size).ys().collect();
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ys, |b, ys| {
            b.iter(|| descending_ranks(black_box(ys)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_ranking);
criterion_main!(benches);
