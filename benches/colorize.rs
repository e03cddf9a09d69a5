//! Benchmarks for colorization and palettization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hclmap::{get_colormap, Blocked, Direct, MaskedArray};
use ndarray::Array2;

fn create_field(size: usize) -> MaskedArray<f64> {
    let field = Array2::from_shape_fn((size, size), |(row, col)| {
        ((row * 7 + col * 13) % 200) as f64 / 199.0
    });
    MaskedArray::from(field)
}

fn bench_colorize(c: &mut Criterion) {
    let cmap = get_colormap("spectral").unwrap();
    let mut group = c.benchmark_group("colorize");
    for size in [256, 512, 1024] {
        let field = create_field(size);
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |b, _| {
            b.iter(|| cmap.colorize_with(&Direct, black_box(&field)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |b, _| {
            b.iter(|| cmap.colorize_with(&Blocked::new(64), black_box(&field)).unwrap())
        });
    }
    group.finish();
}

fn bench_palettize(c: &mut Criterion) {
    let cmap = get_colormap("set3").unwrap();
    let mut group = c.benchmark_group("palettize");
    for size in [256, 512, 1024] {
        let field = create_field(size);
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |b, _| {
            b.iter(|| cmap.palettize_with(&Direct, black_box(&field)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |b, _| {
            b.iter(|| cmap.palettize_with(&Blocked::new(64), black_box(&field)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_colorize, bench_palettize);
criterion_main!(benches);
