use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use scrap_coords::engine::{
    calculate_distances, solve_position, BeaconLayout, Calculator, MapBounds, SolverSettings,
};
use std::hint::black_box;

fn build_query_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 8192) as f64 + 0.37;
            let y = ((i * 53) % 6144) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_distance_calculator(c: &mut Criterion) {
    let beacons = BeaconLayout::standard().positions();
    let points = build_query_points(1000);

    c.bench_function("calculate_distances_1000", |b| {
        b.iter(|| {
            for point in &points {
                black_box(calculate_distances(black_box(*point), &beacons));
            }
        })
    });
}

fn bench_position_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_solver");
    let beacons = BeaconLayout::standard().positions();
    let settings = SolverSettings::default();

    for (name, point) in [
        ("center", DVec2::new(4000.0, 3000.0)),
        ("near_corner", DVec2::new(12.5, 6100.0)),
        ("corner", DVec2::ZERO),
    ] {
        let distances = calculate_distances(point, &beacons);
        group.bench_with_input(BenchmarkId::from_parameter(name), &distances, |b, d| {
            b.iter(|| {
                let report =
                    solve_position(&beacons, black_box(d), &MapBounds::STANDARD, &settings)
                        .expect("Solver konvergiert");
                black_box(report.position)
            })
        });
    }

    group.finish();
}

fn bench_calculator_pipeline(c: &mut Criterion) {
    let calculator = Calculator::default();
    let inputs = ["3000.5", "6000.25", "7000", "4000"];

    c.bench_function("calculator_locate_from_text", |b| {
        b.iter(|| black_box(calculator.locate(black_box(&inputs))))
    });
}

criterion_group!(
    benches,
    bench_distance_calculator,
    bench_position_solver,
    bench_calculator_pipeline
);
criterion_main!(benches);
