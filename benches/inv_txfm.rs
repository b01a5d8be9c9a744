//! Criterion benchmarks for the inverse transform kernels.
//!
//! Run with: cargo bench --bench inv_txfm

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use witx1d::{inv_adst4, inv_adst8, inv_adst16, inv_dct4, inv_dct8, inv_dct16, inv_dct32};

fn fill(buf: &mut [i32], seed: u64) {
    let mut state = seed;
    for v in buf {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *v = ((state >> 33) as i32 & 0x1fff) - 4096;
    }
}

fn bench_dct(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv_dct");
    let mut input = [0i32; 32];
    fill(&mut input, 0xd0);

    group.throughput(Throughput::Elements(4));
    group.bench_function(BenchmarkId::from_parameter(4), |b| {
        let input: &[i32; 4] = input[..4].try_into().unwrap();
        let mut out = [0i32; 4];
        b.iter(|| inv_dct4(black_box(input), &mut out, &[13; 4], &[31; 4]));
    });
    group.throughput(Throughput::Elements(8));
    group.bench_function(BenchmarkId::from_parameter(8), |b| {
        let input: &[i32; 8] = input[..8].try_into().unwrap();
        let mut out = [0i32; 8];
        b.iter(|| inv_dct8(black_box(input), &mut out, &[13; 6], &[31; 6]));
    });
    group.throughput(Throughput::Elements(16));
    group.bench_function(BenchmarkId::from_parameter(16), |b| {
        let input: &[i32; 16] = input[..16].try_into().unwrap();
        let mut out = [0i32; 16];
        b.iter(|| inv_dct16(black_box(input), &mut out, &[13; 8], &[31; 8]));
    });
    group.throughput(Throughput::Elements(32));
    group.bench_function(BenchmarkId::from_parameter(32), |b| {
        let mut out = [0i32; 32];
        b.iter(|| inv_dct32(black_box(&input), &mut out, &[12; 10], &[31; 10]));
    });
    group.finish();
}

fn bench_adst(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv_adst");
    let mut input = [0i32; 16];
    fill(&mut input, 0xad);

    group.throughput(Throughput::Elements(4));
    group.bench_function(BenchmarkId::from_parameter(4), |b| {
        let input: &[i32; 4] = input[..4].try_into().unwrap();
        let mut out = [0i32; 4];
        b.iter(|| inv_adst4(black_box(input), &mut out, &[13; 6], &[31; 6]));
    });
    group.throughput(Throughput::Elements(8));
    group.bench_function(BenchmarkId::from_parameter(8), |b| {
        let input: &[i32; 8] = input[..8].try_into().unwrap();
        let mut out = [0i32; 8];
        b.iter(|| inv_adst8(black_box(input), &mut out, &[13; 8], &[31; 8]));
    });
    group.throughput(Throughput::Elements(16));
    group.bench_function(BenchmarkId::from_parameter(16), |b| {
        let mut out = [0i32; 16];
        b.iter(|| inv_adst16(black_box(&input), &mut out, &[13; 10], &[31; 10]));
    });
    group.finish();
}

criterion_group!(benches, bench_dct, bench_adst);
criterion_main!(benches);
