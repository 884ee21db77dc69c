use base64url_cookie::{decode, encode, utf16_to_base64url};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_text(size: usize) -> String {
    // Mix of 1, 2, 3 and 4 byte characters
    let pattern = "session=abc; naïve café 日本 😀 ";
    pattern
        .chars()
        .cycle()
        .scan(0usize, |len, c| {
            *len += c.len_utf8();
            (*len <= size).then_some(c)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let text = sample_text(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| encode(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_utf16(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_utf16");

    for size in [64, 1024, 16384].iter() {
        let units: Vec<u16> = sample_text(*size).encode_utf16().collect();
        group.throughput(Throughput::Elements(units.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &units, |b, units| {
            b.iter(|| utf16_to_base64url(black_box(units)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let text = sample_text(*size);
        let encoded = encode(&text).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_encode_utf16, bench_decode);
criterion_main!(benches);
