use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use wmbus_rs::payload::data_encoding::{decode_bcd, decode_int};
use wmbus_rs::{decode_record, parse, parse_records};

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap()
}

// Test data samples
const ACK_FRAME_HEX: &str = "E5";
const SHORT_FRAME_HEX: &str = "10400141 16";
const LONG_FRAME_HEX: &str =
    "6820443330545602000B027A87001025D6F42DD2660C656EEB463DD8C264C30ED7CD16";
const RECORD_PAYLOAD_HEX: &str =
    "2F2F02659D0B42659A0B820165520B02FB1A2F0242FB1A2F0202FD3A4E012F2F2F2F";

fn benchmark_frame_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_parsing");
    group.measurement_time(Duration::from_secs(5));

    let ack = hex_to_bytes(ACK_FRAME_HEX);
    group.bench_function("ack_frame", |b| {
        b.iter(|| {
            let _ = parse(black_box(&ack));
        })
    });

    let short = hex_to_bytes(&SHORT_FRAME_HEX.replace(' ', ""));
    group.bench_function("short_frame", |b| {
        b.iter(|| {
            let _ = parse(black_box(&short));
        })
    });

    let long = hex_to_bytes(LONG_FRAME_HEX);
    group.bench_function("long_frame", |b| {
        b.iter(|| {
            let _ = parse(black_box(&long));
        })
    });

    group.finish();
}

fn benchmark_record_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_walk");
    let payload = hex_to_bytes(RECORD_PAYLOAD_HEX);

    group.bench_function("parse_records", |b| {
        b.iter(|| {
            let _ = parse_records(black_box(&payload));
        })
    });

    let block = parse_records(&payload).unwrap();
    group.bench_function("decode_records", |b| {
        b.iter(|| {
            for record in &block.records {
                let _ = decode_record(black_box(record));
            }
        })
    });

    group.finish();
}

fn benchmark_scalar_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_decoding");

    let int_data = [0x9D, 0x0B, 0x00, 0x00];
    group.bench_function("decode_int_4", |b| {
        b.iter(|| {
            let _ = decode_int(black_box(&int_data), 4);
        })
    });

    let bcd_data = [0x34, 0x12, 0x00, 0x00];
    group.bench_function("decode_bcd_4", |b| {
        b.iter(|| {
            let _ = decode_bcd(black_box(&bcd_data), 4);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_frame_parsing,
    benchmark_record_walk,
    benchmark_scalar_decoding
);
criterion_main!(benches);
