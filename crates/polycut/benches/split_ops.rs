//! Benchmarks for the split engine's pair enumeration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polycut::{split, Point2, Polygon, SplitSettings};

fn regular_polygon(sides: usize, radius: f64) -> Polygon {
    let points = (0..sides)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / sides as f64;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(points)
}

fn bench_split(c: &mut Criterion) {
    let settings = SplitSettings::default();

    let mut group = c.benchmark_group("split");
    for sides in [8, 16, 32] {
        let polygon = regular_polygon(sides, 100.0);
        let target = polygon.area() / 3.0;
        group.bench_function(format!("regular_{sides}"), |b| {
            b.iter(|| split(black_box(&polygon), black_box(target), &settings))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
