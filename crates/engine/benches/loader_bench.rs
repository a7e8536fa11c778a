//! Benchmarks for pallet loading.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use palletload_engine::{Footprint, LoadMode, PalletDescriptor, PalletLoader, Solver};

fn load(count: usize) -> Vec<PalletDescriptor> {
    const FOOTPRINTS: [(f64, f64, f64); 4] = [
        (59.0, 39.0, 50.0),
        (80.0, 47.0, 45.0),
        (48.0, 40.0, 40.0),
        (120.0, 80.0, 90.0),
    ];

    (0..count)
        .map(|i| {
            let (w, d, h) = FOOTPRINTS[i % FOOTPRINTS.len()];
            PalletDescriptor::new(format!("S{}", i), "PN", "Item", Footprint::new(w, d, h))
        })
        .collect()
}

fn loader_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for mode in [LoadMode::Container, LoadMode::Trailer] {
        let loader = PalletLoader::for_mode(mode);
        let container = mode.container();

        for count in [40, 400] {
            let pallets = load(count);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), count),
                &pallets,
                |b, pallets| b.iter(|| loader.solve(black_box(pallets), black_box(&container))),
            );
        }
    }

    group.finish();
}

fn batch_benchmark(c: &mut Criterion) {
    let loads: Vec<_> = (0..32).map(|_| load(200)).collect();
    let loader = PalletLoader::for_mode(LoadMode::Trailer);
    let container = LoadMode::Trailer.container();

    c.bench_function("solve_batch_32x200", |b| {
        b.iter(|| black_box(loader.solve_batch(black_box(&loads), &container)))
    });
}

criterion_group!(benches, loader_benchmark, batch_benchmark);
criterion_main!(benches);
