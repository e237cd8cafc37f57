//! Benchmarks for the payoff calculator.
//!
//! Run with: cargo bench -p payoff-core

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use payoff_core::{evaluate_call, evaluate_put, OptionContract};

fn bench_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    group.bench_function("call", |b| {
        b.iter(|| evaluate_call(black_box(100.0), black_box(5.25)))
    });
    group.bench_function("put", |b| {
        b.iter(|| evaluate_put(black_box(100.0), black_box(5.25)))
    });

    group.finish();
}

fn bench_profit_at_expiry(c: &mut Criterion) {
    let put = OptionContract::put(100.0, 5.25).unwrap();

    c.bench_function("put_profit_at", |b| {
        b.iter(|| put.profit_at(black_box(87.5)))
    });
}

criterion_group!(benches, bench_summaries, bench_profit_at_expiry);
criterion_main!(benches);
