//! Performance benchmarks for the case-converter family
//!
//! Run with: cargo bench --bench case_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recase_core::case::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
use std::hint::black_box;

/// Generate identifier-like text with mixed delimiters and casings
fn generate_text(words: usize) -> String {
    let vocabulary = ["alpha", "BETA", "gammaRay", "Delta_four", "epsilon-5"];
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(vocabulary[i % vocabulary.len()]);
    }
    text
}

fn bench_converters(c: &mut Criterion) {
    let mut group = c.benchmark_group("converters");

    for words in [4, 64, 1024] {
        let text = generate_text(words);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("camel", words), &text, |b, text| {
            b.iter(|| to_camel_case(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("pascal", words), &text, |b, text| {
            b.iter(|| to_pascal_case(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("kebab", words), &text, |b, text| {
            b.iter(|| to_kebab_case(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("snake", words), &text, |b, text| {
            b.iter(|| to_snake_case(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_converters);
criterion_main!(benches);
