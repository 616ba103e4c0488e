use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use defender_sphere::{NearestStrategy, SphereGrid, spiral_points};
use glam::DVec3;

fn bench_spiral_points(c: &mut Criterion) {
    c.bench_function("spiral_points_10k", |bencher| {
        bencher.iter(|| black_box(spiral_points(black_box(10_000))))
    });
}

fn bench_nearest(c: &mut Criterion) {
    let query = DVec3::new(0.3, -0.2, 0.9).normalize();
    let mut group = c.benchmark_group("nearest_cell");
    for n in [500usize, 5_000, 50_000] {
        for strategy in [NearestStrategy::LinearScan, NearestStrategy::LatitudeBands] {
            let grid: SphereGrid<()> = SphereGrid::with_strategy(n, strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &grid,
                |bencher, grid| bencher.iter(|| black_box(grid.nearest_cell(black_box(query)))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_spiral_points, bench_nearest);
criterion_main!(benches);
