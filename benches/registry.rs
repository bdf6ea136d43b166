//! Benchmarks for registry lookups

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exchange_codes::{parse_exchange, resolve_alias, resolve_code, Exchange, ExchangeCodeRegistry};

fn bench_resolve_code(c: &mut Criterion) {
    ExchangeCodeRegistry::global();
    let mut group = c.benchmark_group("resolve_code");

    group.bench_function("hit", |b| {
        b.iter(|| black_box(resolve_code(black_box(Exchange::Tokyo), black_box("ORDER"))))
    });
    group.bench_function("unknown_context", |b| {
        b.iter(|| black_box(resolve_code(black_box(Exchange::Tokyo), black_box("UNKNOWN"))))
    });

    group.finish();
}

fn bench_parse_exchange(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_exchange");

    group.bench_function("lowercase", |b| {
        b.iter(|| black_box(parse_exchange(black_box("hochiminh"))))
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(parse_exchange(black_box("NOT_AN_EXCHANGE"))))
    });

    group.finish();
}

fn bench_resolve_alias(c: &mut Criterion) {
    c.bench_function("resolve_alias", |b| {
        b.iter(|| black_box(resolve_alias(black_box("arca"))))
    });
}

criterion_group!(benches, bench_resolve_code, bench_parse_exchange, bench_resolve_alias);
criterion_main!(benches);
