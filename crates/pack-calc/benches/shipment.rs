//! 出貨優化基準測試

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pack_calc::{minimum_count_decomposition, minimum_reachable_total, ShipmentOptimizer};

const SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");
    for order in [1_001u64, 12_001, 250_001] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| minimum_reachable_total(black_box(order), black_box(&SIZES[..])))
        });
    }
    group.finish();
}

fn bench_decomposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("decomposition");
    for target in [1_250u64, 12_250, 250_250] {
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            b.iter(|| minimum_count_decomposition(black_box(target), black_box(&SIZES[..])))
        });
    }
    group.finish();
}

fn bench_optimizer(c: &mut Criterion) {
    let optimizer = ShipmentOptimizer::default();
    let sizes: Vec<i64> = SIZES.iter().map(|&s| s as i64).collect();

    c.bench_function("optimizer/12001", |b| {
        b.iter(|| optimizer.compute_shipment(black_box(12_001), black_box(sizes.as_slice())))
    });

    // 互質規格
    let coprime: [i64; 3] = [23, 31, 53];
    c.bench_function("optimizer/coprime_99991", |b| {
        b.iter(|| optimizer.compute_shipment(black_box(99_991), black_box(&coprime[..])))
    });
}

criterion_group!(benches, bench_reachability, bench_decomposition, bench_optimizer);
criterion_main!(benches);
