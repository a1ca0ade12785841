//! Benchmarks for payload normalization
//!
//! Measures the per-callback cost of:
//! - Decoding a YAML field payload into raw structures
//! - Normalizing complete and partial payloads into strict snapshots
//! - Mirroring a normalized field for reverse-coordinate mode

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use v5strategy::normalize::{Normalizer, normalize_field};
use v5strategy::payload::RawField;
use v5strategy::test_utils::{raw_field, require_payload_fixture};

fn bench_decode(c: &mut Criterion) {
    let text = require_payload_fixture("field_complete.yaml").expect("fixture");

    c.bench_function("decode_field_yaml", |b| {
        b.iter(|| black_box(RawField::from_yaml(black_box(&text)).expect("decode")))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let complete = raw_field(40, 5);
    let partial = RawField::from_yaml(&require_payload_fixture("field_partial.yaml").expect("fixture"))
        .expect("decode");

    let mut group = c.benchmark_group("normalize_field");
    group.bench_function("complete", |b| {
        b.iter(|| black_box(normalize_field(black_box(&complete)).expect("normalize")))
    });
    group.bench_function("partial_with_report", |b| {
        b.iter(|| {
            let mut normalizer = Normalizer::new();
            let field = normalizer.field(black_box(&partial)).expect("normalize");
            black_box((field, normalizer.finish()))
        })
    });
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let field = normalize_field(&raw_field(40, 5)).expect("normalize");

    c.bench_function("reverse_field", |b| b.iter(|| black_box(black_box(&field).reversed())));
}

criterion_group!(benches, bench_decode, bench_normalize, bench_reverse);
criterion_main!(benches);
