use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_rational::BigRational;
use osc_math::interpolations::FieldHermiteInterpolator;

fn build_f64(points: usize, orders: usize) -> FieldHermiteInterpolator<f64> {
    let mut h = FieldHermiteInterpolator::with_capacity(points * orders);
    for i in 0..points {
        let x = i as f64 / points as f64;
        // derivatives of sin: sin, cos, -sin, -cos, …
        let derivatives: Vec<Vec<f64>> = (0..orders)
            .map(|k| {
                let v = match k % 4 {
                    0 => x.sin(),
                    1 => x.cos(),
                    2 => -x.sin(),
                    _ => -x.cos(),
                };
                vec![v, 2.0 * v]
            })
            .collect();
        // Abscissas are distinct by construction.
        h.add_sample_point(x, &derivatives).unwrap();
    }
    h
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermite_build_f64");
    for &points in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(points), &points, |b, &n| {
            b.iter(|| build_f64(black_box(n), 3))
        });
    }
    group.finish();
}

fn bench_value(c: &mut Criterion) {
    let h = build_f64(16, 3);
    c.bench_function("hermite_value_f64_48_nodes", |b| {
        b.iter(|| h.value(black_box(&0.37)))
    });
    c.bench_function("hermite_derivatives_f64_48_nodes", |b| {
        b.iter(|| h.derivatives(black_box(&0.37), 2))
    });
}

fn bench_rational(c: &mut Criterion) {
    c.bench_function("hermite_build_rational_8_points", |b| {
        b.iter(|| {
            let mut h = FieldHermiteInterpolator::new();
            for i in 0..8i64 {
                let x = BigRational::new(i.into(), 3.into());
                let y = x.clone() * x.clone();
                let dy = x.clone() + x.clone();
                h.add_sample_point(x, &[vec![y], vec![dy]]).unwrap();
            }
            h.value(&BigRational::new(5.into(), 7.into()))
        })
    });
}

criterion_group!(benches, bench_build, bench_value, bench_rational);
criterion_main!(benches);
