use crate::reference::reference_convolution;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use langaus_compute::prelude::*;

#[path = "../tests/reference.rs"] // Forbidden hack to avoid code duplication
mod reference;

fn langaus_benchmark(c: &mut Criterion) {
    const N: usize = 1000;
    let params = LangausParams::new(1.0, 10.0, 1.0, 1.0);
    let xs: Vec<f64> = (0..N).map(|i| i as f64 / 30.0).collect();
    let xs32: Vec<f32> = xs.iter().map(|&x| x as f32).collect();
    let lg = Langaus::new();

    c.bench_function("langaus single CPU", |b| {
        b.iter(|| lg.evaluate(black_box(10.0), black_box(&params)))
    });
    c.bench_function("langaus CPU sequential", |b| {
        b.iter(|| {
            black_box(&xs)
                .iter()
                .map(|&x| lg.evaluate(x, &params))
                .collect::<Vec<_>>()
        })
    });
    c.bench_function("langaus CPU rayon", |b| {
        b.iter(|| lg.evaluate_many(black_box(&xs), &params))
    });
    c.bench_function("reference convolution CPU", |b| {
        b.iter(|| reference_convolution(black_box(&xs[..10]), &params))
    });
    match GpuLangaus::new() {
        Ok(gpu) => {
            c.bench_function("langaus GPU", |b| {
                b.iter(|| gpu.evaluate(black_box(&xs32), &params))
            });
        }
        Err(e) => eprintln!("skipping GPU benchmark: {}", e),
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    langaus_benchmark(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
