#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: strutils vs url crate vs base64 crate
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Rust url crate
use url::Url as UrlCrate;

fn bench_split_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_simple");
    let input = "http://example.com/";

    group.bench_function("strutils", |b| {
        let mut buffer = String::with_capacity(input.len());
        b.iter(|| {
            buffer.clear();
            buffer.push_str(black_box(input));
            strutils::split_url(&mut buffer).unwrap().port
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_split_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_complex");
    let input = "HTTPS://secure.example.com:8080/path/to/resource?query=value&key=data#section";

    group.bench_function("strutils", |b| {
        let mut buffer = String::with_capacity(input.len());
        b.iter(|| {
            buffer.clear();
            buffer.push_str(black_box(input));
            strutils::split_url(&mut buffer).unwrap().port
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_base64_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base64_encode_4k");
    let input: Vec<u8> = (0..4096u32).map(|i| (i * 31) as u8).collect();
    let mut output = vec![0u8; strutils::base64_encoded_size(input.len()) + 1];

    group.bench_function("strutils", |b| {
        b.iter(|| strutils::base64_encode(black_box(&input), &mut output).unwrap().len());
    });

    group.bench_function("base64_crate", |b| {
        b.iter(|| STANDARD.encode(black_box(&input)));
    });

    group.finish();
}

fn bench_utf8_to_latin1(c: &mut Criterion) {
    let text = "Grüße aus Köln! Ça va? 東京 😀 ".repeat(128);

    c.bench_function("utf8_to_latin1_4k", |b| {
        let mut buffer = Vec::with_capacity(text.len());
        b.iter(|| {
            buffer.clear();
            buffer.extend_from_slice(black_box(text.as_bytes()));
            strutils::utf8_to_latin1(&mut buffer)
        });
    });
}

criterion_group!(
    benches,
    bench_split_simple,
    bench_split_complex,
    bench_base64_encode,
    bench_utf8_to_latin1
);
criterion_main!(benches);
