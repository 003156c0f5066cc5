use cloud_sketch::engine::{
    build_closed_path_data, parse_path_data, path_bounds, simplify_rdp, SketchSurface,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

/// Synthetische Wolkenspur: Kreis mit überlagerter Welligkeit.
fn build_synthetic_stroke(point_count: usize) -> Vec<DVec2> {
    (0..point_count)
        .map(|i| {
            let t = i as f64 / point_count as f64 * std::f64::consts::TAU;
            let radius = 300.0 + 25.0 * (t * 9.0).sin() + 3.0 * (t * 97.0).cos();
            DVec2::new(960.0 + radius * t.cos(), 540.0 + radius * t.sin())
        })
        .collect()
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify_rdp");

    for &point_count in &[1_000usize, 20_000usize] {
        let stroke = build_synthetic_stroke(point_count);

        group.bench_with_input(
            BenchmarkId::new("epsilon_2_5", point_count),
            &stroke,
            |b, points| b.iter(|| black_box(simplify_rdp(black_box(points), 2.5).len())),
        );
    }

    group.finish();
}

fn bench_closed_path(c: &mut Criterion) {
    let simplified = simplify_rdp(&build_synthetic_stroke(5_000), 2.5);

    c.bench_function("build_closed_path_data", |b| {
        b.iter(|| black_box(build_closed_path_data(black_box(&simplified)).len()))
    });

    let path_data = build_closed_path_data(&simplified);
    c.bench_function("parse_and_bound_path_data", |b| {
        b.iter(|| black_box(path_bounds(&parse_path_data(black_box(&path_data)))))
    });
}

fn bench_surface_stroke(c: &mut Criterion) {
    let stroke = build_synthetic_stroke(2_000);

    c.bench_function("surface_full_stroke", |b| {
        b.iter(|| {
            let mut surface = SketchSurface::default();
            surface.pointer_down(1, stroke[0]);
            for &pos in &stroke[1..] {
                surface.pointer_move(1, black_box(pos));
            }
            black_box(surface.pointer_up(1))
        })
    });
}

criterion_group!(
    core_benches,
    bench_simplify,
    bench_closed_path,
    bench_surface_stroke
);
criterion_main!(core_benches);
