//! Criterion micro-benchmarks for Cstring building, decoding and formatting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strand_bench::{mixed_codepoints, mixed_text, ramp};
use strand_text::fmt::{fmt_display, fmt_dynarray};
use strand_text::{utf8, Cstring, Str};

/// Benchmark: push 10K codepoints of mixed width.
fn bench_push_codepoints_10k(c: &mut Criterion) {
    let codepoints = mixed_codepoints(10_000);
    c.bench_function("push_codepoints_10k", |b| {
        b.iter(|| {
            let mut s = Cstring::new();
            for &cp in &codepoints {
                s.push(cp);
            }
            black_box(s.len());
        });
    });
}

/// Benchmark: append 1K short string slices.
fn bench_extend_str_1k(c: &mut Criterion) {
    let chunk = mixed_text(16);
    c.bench_function("extend_str_1k", |b| {
        b.iter(|| {
            let mut s = Cstring::new();
            for _ in 0..1_000 {
                s.extend_str(&chunk);
            }
            black_box(s.len());
        });
    });
}

/// Benchmark: walk the codepoints of 10K mixed-width characters.
fn bench_codepoints_10k(c: &mut Criterion) {
    let text = Cstring::is(&mixed_text(10_000));
    c.bench_function("codepoints_10k", |b| {
        b.iter(|| {
            let sum: u64 = text.codepoints().map(|cp| u64::from(cp.value())).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: strict validation of 10K mixed-width characters.
fn bench_validate_10k(c: &mut Criterion) {
    let text = mixed_text(10_000);
    c.bench_function("validate_10k", |b| {
        b.iter(|| {
            black_box(utf8::validate(black_box(text.as_bytes())).is_ok());
        });
    });
    c.bench_function("str_new_10k", |b| {
        b.iter(|| {
            black_box(Str::new(black_box(text.as_bytes())).is_ok());
        });
    });
}

/// Benchmark: render a 1K-element dynarray as `{ ... }`.
fn bench_fmt_dynarray_1k(c: &mut Criterion) {
    let arr = ramp(1_000);
    c.bench_function("fmt_dynarray_1k", |b| {
        b.iter(|| {
            let mut out = Cstring::new();
            fmt_dynarray(&mut out, &arr, fmt_display).unwrap();
            black_box(out.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_codepoints_10k,
    bench_extend_str_1k,
    bench_codepoints_10k,
    bench_validate_10k,
    bench_fmt_dynarray_1k
);
criterion_main!(benches);
