// In benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huffpack::{compress, decompress};

/// Generates a vector of highly compressible data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Generates a vector of less compressible, more random-looking data.
fn generate_high_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern: Vec<u8> = (0..=255u8).collect();
    while data.len() < size {
        data.extend_from_slice(&pattern);
    }
    data.truncate(size);
    data
}

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_codec(c: &mut Criterion) {
    let low_entropy_data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let high_entropy_data = generate_high_entropy_bytes(BENCH_DATA_SIZE);

    // Prepare encoded data once to benchmark decoding accurately.
    let encoded_low = compress(&low_entropy_data).unwrap();
    let encoded_high = compress(&high_entropy_data).unwrap();

    let mut group = c.benchmark_group("Huffman Codec");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Compress (Low Entropy)", |b| {
        b.iter(|| black_box(compress(black_box(&low_entropy_data))))
    });
    group.bench_function("Compress (High Entropy)", |b| {
        b.iter(|| black_box(compress(black_box(&high_entropy_data))))
    });

    group.bench_function("Decompress (Low Entropy)", |b| {
        b.iter(|| black_box(decompress(black_box(&encoded_low))))
    });
    group.bench_function("Decompress (High Entropy)", |b| {
        b.iter(|| black_box(decompress(black_box(&encoded_high))))
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
