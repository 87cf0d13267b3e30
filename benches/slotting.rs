//! Benchmark neighbor slotting and region selection.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sector_grid::GridSize;
use sector_grid::core::{ProjectedPoint, Vector3};
use sector_grid::selection::{SelectionRegion, select_in_region};
use sector_grid::slotting::{NeighborSlotter, rank_by_distance};

/// Soundings on a jittered lattice around the origin.
fn survey_points(n: usize, spacing: f64) -> Vec<ProjectedPoint> {
    let side = (n as f64).sqrt().ceil() as usize;
    let half = side as f64 * spacing / 2.0;
    (0..n)
        .map(|i| {
            let (row, col) = (i / side, i % side);
            let jitter = ((i * 7919) % 100) as f64 / 100.0 - 0.5;
            ProjectedPoint::planar(
                i + 1,
                col as f64 * spacing - half + jitter * spacing * 0.3,
                row as f64 * spacing - half - jitter * spacing * 0.2,
            )
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let focal = ProjectedPoint::planar(0, 0.0, 0.0);
    let candidates = survey_points(1000, 5.0);

    c.bench_function("rank_1000pts", |b| {
        b.iter(|| {
            let ranked = rank_by_distance(black_box(&focal), black_box(&candidates));
            black_box(ranked)
        })
    });
}

fn bench_slot_grid_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_grid_size");
    let focal = ProjectedPoint::planar(0, 0.0, 0.0);
    let candidates = survey_points(200, 5.0);

    for size in GridSize::ALL {
        let slotter = NeighborSlotter::new(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let grid = slotter.slot(black_box(&focal), black_box(&candidates));
                black_box(grid)
            })
        });
    }

    group.finish();
}

fn bench_select_polygon(c: &mut Criterion) {
    let candidates = survey_points(5000, 2.0);
    let region = SelectionRegion::polygon(vec![
        Vector3::planar(-50.0, -40.0),
        Vector3::planar(40.0, -55.0),
        Vector3::planar(60.0, 10.0),
        Vector3::planar(5.0, 0.0),
        Vector3::planar(-20.0, 45.0),
    ]);

    if let Ok(region) = region {
        c.bench_function("select_polygon_5000pts", |b| {
            b.iter(|| {
                let selected = select_in_region(black_box(&region), black_box(&candidates));
                black_box(selected)
            })
        });
    }
}

criterion_group!(
    benches,
    bench_rank,
    bench_slot_grid_sizes,
    bench_select_polygon
);
criterion_main!(benches);
