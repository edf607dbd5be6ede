use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use cxkit::prelude::*;

fn inputs(n: usize) -> Vec<Cx64> {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    (0..n)
        .map(|_| Cx64::new(rng.random_range(-8.0..8.0), rng.random_range(-8.0..8.0)))
        .collect()
}

fn bench_unary(c: &mut Criterion) {
    let data = inputs(1024);
    let ops: [(&str, fn(Cx64) -> Cx64); 8] = [
        ("inv", |z| z.inv()),
        ("sqrt", |z| z.sqrt()),
        ("sqrt_via_exp_ln", |z| z.ln().scale(0.5).exp()),
        ("exp", |z| z.exp()),
        ("ln", |z| z.ln()),
        ("sin", |z| z.sin()),
        ("tanh", |z| z.tanh()),
        ("asin", |z| z.asin()),
    ];

    let mut group = c.benchmark_group("unary");
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(data.len() as u64));
    for (name, op) in ops {
        group.bench_with_input(BenchmarkId::new("cx", name), &data, |b, data| {
            b.iter(|| {
                let mut acc = Cx64::ZERO;
                for z in data {
                    acc += op(black_box(*z));
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_against_num_complex(c: &mut Criterion) {
    let data = inputs(1024);
    let reference: Vec<Complex64> = data.iter().map(|&z| z.into()).collect();

    let mut group = c.benchmark_group("sqrt_comparison");
    group.throughput(Throughput::Elements(data.len() as u64));
    group.bench_function("cxkit", |b| {
        b.iter(|| data.iter().map(|z| black_box(*z).sqrt()).fold(Cx64::ZERO, |a, z| a + z))
    });
    group.bench_function("num_complex", |b| {
        b.iter(|| {
            reference
                .iter()
                .map(|z| black_box(*z).sqrt())
                .fold(Complex64::new(0.0, 0.0), |a, z| a + z)
        })
    });
    group.finish();
}

fn bench_powi(c: &mut Criterion) {
    let z = Cx64::new(0.999, 0.01);
    let mut group = c.benchmark_group("powi");
    for n in [2, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(z).powi(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("pow", n), &n, |b, &n| {
            b.iter(|| black_box(z).pow(Cx64::from_real(black_box(n) as f64)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_unary, bench_against_num_complex, bench_powi);
criterion_main!(benches);
