//! Lane-wise arithmetic on the native 4-lane types against the same work done
//! with scalar arrays.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanewise::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BATCH_SIZES: &[usize] = &[256, 4_096, 65_536];

fn generate_f32(len: usize) -> Vec<[f32; 4]> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| std::array::from_fn(|_| rng.random::<f32>() * 2.0 - 1.0))
        .collect()
}

fn generate_i32(len: usize) -> Vec<[i32; 4]> {
    let mut rng = StdRng::seed_from_u64(43);
    (0..len).map(|_| rng.random()).collect()
}

fn benchmark_float_multiply_add(c: &mut Criterion) {
    for &size in BATCH_SIZES {
        let mut group = c.benchmark_group(format!("Float32x4 multiply-add {size}"));
        group.throughput(Throughput::Elements((size * 4) as u64));

        let input = generate_f32(size);
        let lanes: Vec<Float32x4> = input.iter().copied().map(Float32x4::from).collect();

        group.bench_with_input(BenchmarkId::new("Scalar", size), &input, |b, input| {
            b.iter(|| {
                input.iter().fold([0.0f32; 4], |acc, x| {
                    std::array::from_fn(|i| acc[i] + x[i] * 0.5)
                })
            })
        });

        group.bench_with_input(BenchmarkId::new(lanewise::BACKEND, size), &lanes, |b, lanes| {
            b.iter(|| {
                lanes
                    .iter()
                    .fold(Float32x4::zero(), |acc, &x| acc + x * black_box(0.5))
            })
        });

        group.finish();
    }
}

fn benchmark_integer_magnitude(c: &mut Criterion) {
    for &size in BATCH_SIZES {
        let mut group = c.benchmark_group(format!("Int32x4 magnitude {size}"));
        group.throughput(Throughput::Elements((size * 4) as u64));

        let input = generate_i32(size);
        let lanes: Vec<Int32x4> = input.iter().copied().map(Int32x4::from).collect();

        group.bench_with_input(BenchmarkId::new("Scalar", size), &input, |b, input| {
            b.iter(|| {
                black_box(
                    input
                        .iter()
                        .map(|x| x.map(i32::unsigned_abs))
                        .collect::<Vec<[u32; 4]>>(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new(lanewise::BACKEND, size), &lanes, |b, lanes| {
            b.iter(|| {
                black_box(
                    lanes
                        .iter()
                        .map(|x| x.magnitude())
                        .collect::<Vec<UInt32x4>>(),
                )
            })
        });

        group.finish();
    }
}

fn benchmark_integer_shift_mix(c: &mut Criterion) {
    let input = generate_i32(4_096);
    let lanes: Vec<Int32x4> = input.iter().copied().map(Int32x4::from).collect();

    let mut group = c.benchmark_group("Int32x4 shift-xor");
    group.throughput(Throughput::Elements((input.len() * 4) as u64));

    group.bench_function("Scalar", |b| {
        b.iter(|| {
            input.iter().fold([0i32; 4], |acc, x| {
                std::array::from_fn(|i| acc[i] ^ ((x[i] << 3) >> 1))
            })
        })
    });

    group.bench_function(lanewise::BACKEND, |b| {
        b.iter(|| {
            lanes
                .iter()
                .fold(Int32x4::zero(), |acc, &x| acc ^ ((x << black_box(3)) >> 1))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_float_multiply_add,
    benchmark_integer_magnitude,
    benchmark_integer_shift_mix
);
criterion_main!(benches);
