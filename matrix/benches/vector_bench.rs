use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix::{Vector, Vector3, Vector4};

pub fn add_3(c: &mut Criterion) {
    let this = black_box(Vector3::<f64>::new(1., 2., 3.));
    let other = black_box(Vector3::<f64>::new(0.5, -1., 2.));

    c.bench_function("add_3", |b| b.iter(|| black_box(this) + black_box(other)));
}

pub fn dot_4(c: &mut Criterion) {
    let this = black_box(Vector4::<f64>::new(1., 2., 3., 4.));
    let other = black_box(Vector4::<f64>::new(0.5, -1., 2., 0.25));

    c.bench_function("dot_4", |b| b.iter(|| black_box(this).dot(&black_box(other))));
}

pub fn dot_16(c: &mut Criterion) {
    let this = black_box(Vector::<f64, 16>::splat(1.23123));
    let other = black_box(Vector::<f64, 16>::splat(0.5));

    c.bench_function("dot_16", |b| b.iter(|| black_box(this).dot(&black_box(other))));
}

pub fn cross_3(c: &mut Criterion) {
    let this = black_box(Vector3::<f64>::new(1., 2., 3.));
    let other = black_box(Vector3::<f64>::new(0.5, -1., 2.));

    c.bench_function("cross_3", |b| {
        b.iter(|| black_box(this).cross(&black_box(other)))
    });
}

pub fn scale_16(c: &mut Criterion) {
    let this = black_box(Vector::<f64, 16>::splat(1.23123));

    c.bench_function("scale_16", |b| b.iter(|| black_box(this) * black_box(22.0)));
}

criterion_group!(benches, add_3, dot_4, dot_16, cross_3, scale_16,);
criterion_main!(benches);
