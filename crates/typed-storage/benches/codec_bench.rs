use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use serde::{Deserialize, Serialize};
use typed_storage::{Storable, StorageSerializer};

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Row {
    a: u32,
    b: String,
    c: bool,
}

impl Storable for Row {}

// Deterministic pseudo-random rows, so runs compare across machines.
fn gen_rows(n: usize) -> Vec<Row> {
    let mut state = 42u64;
    let mut next = move || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u32
    };
    (0..n as u32)
        .map(|i| Row {
            a: i,
            b: (0..8).map(|_| (b'a' + (next() % 26) as u8) as char).collect(),
            c: next() % 2 == 0,
        })
        .collect()
}

fn gen_ints(n: usize) -> Vec<i32> {
    (0..n as i32).map(|i| i.wrapping_mul(2_654_435_761u32 as i32)).collect()
}

pub fn codec_benchmarks(c: &mut Criterion) {
    let ser = StorageSerializer::new();

    let mut group = c.benchmark_group("generic_array");
    for &n in &[100, 1_000, 10_000] {
        let rows = gen_rows(n);
        let encoded = ser.serialize(Some(&rows)).unwrap().unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_function(format!("serialize::{n}"), |b| {
            b.iter_batched(
                || rows.clone(),
                |r| black_box(ser.serialize(Some(&r)).unwrap()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("deserialize::{n}"), |b| {
            b.iter_batched(
                || encoded.clone(),
                |s| black_box(ser.deserialize::<Vec<Row>>(Some(s.as_str())).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();

    let mut group = c.benchmark_group("int_array");
    for &n in &[100, 10_000] {
        let ints = gen_ints(n);
        let encoded = ser.serialize(Some(&ints)).unwrap().unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_function(format!("serialize::{n}"), |b| {
            b.iter(|| black_box(ser.serialize(Some(black_box(&ints))).unwrap()))
        });
        group.bench_function(format!("deserialize::{n}"), |b| {
            b.iter(|| black_box(ser.deserialize::<Vec<i32>>(Some(black_box(encoded.as_str()))).unwrap()))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("string_fast_path");
    let text = "x".repeat(4096);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("deserialize", |b| {
        b.iter(|| black_box(ser.deserialize::<String>(Some(black_box(text.as_str()))).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
