//! Criterion benchmarks for regular polygon validation and measures.
//! Focus sizes: V in {3, 6, 8, 12}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use regpoly::prelude::*;

fn bench_one<const V: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("regular_polygon");
    let cfg = PlacementCfg::default();
    group.bench_function(BenchmarkId::new("validate", V), |b| {
        let mut tok = ReplayToken::new(43, 0);
        b.iter_batched(
            || {
                tok = tok.next();
                regpoly::sample::draw_placement(cfg, tok).vertices::<f64>(V)
            },
            |pts| {
                let _p = RegularPolygon::<f64, V>::new(pts).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("area_centroid", V), |b| {
        let p: RegularPolygon<f64, V> = draw_regular(cfg, ReplayToken::new(44, 0)).unwrap();
        b.iter(|| (p.area(), p.centroid()))
    });
    group.bench_function(BenchmarkId::new("congruence", V), |b| {
        let p: RegularPolygon<f64, V> = draw_regular(cfg, ReplayToken::new(45, 0)).unwrap();
        let q: RegularPolygon<f64, V> = draw_regular(cfg, ReplayToken::new(45, 1)).unwrap();
        b.iter(|| p == q)
    });
    group.finish();
}

fn bench_polygons(c: &mut Criterion) {
    bench_one::<3>(c);
    bench_one::<6>(c);
    bench_one::<8>(c);
    bench_one::<12>(c);
}

criterion_group!(benches, bench_polygons);
criterion_main!(benches);
