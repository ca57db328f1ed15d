use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figaro::{cartesian_to_celestial, celestial_to_cartesian, jacobian};
use ndarray::Array2;

fn sample_batch(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, 3), |(i, j)| ((i * 3 + j) as f64 * 0.37).sin() * 10.0 + 0.1)
}

fn bench_transforms(c: &mut Criterion) {
    let cartesian = sample_batch(10_000);
    let celestial = cartesian_to_celestial(&cartesian).unwrap();

    c.bench_function("cartesian_to_celestial 10k", |b| {
        b.iter(|| cartesian_to_celestial(black_box(&cartesian)).unwrap())
    });
    c.bench_function("celestial_to_cartesian 10k", |b| {
        b.iter(|| celestial_to_cartesian(black_box(&celestial)).unwrap())
    });
    c.bench_function("jacobian 10k", |b| {
        b.iter(|| jacobian(black_box(&cartesian)).unwrap())
    });
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
