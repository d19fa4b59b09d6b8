use criterion::{criterion_group, criterion_main, Criterion};
use dxt_block_codec_bc4::{decode_unorm_channel, encode_snorm_channel, encode_unorm_channel};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC4 Channels");

    // 1MB of BC4 blocks
    let bc4_size = 1048576;
    let blocks_count = bc4_size / 8;

    let input: Vec<u8> = (0..bc4_size).map(|i| (i % 251) as u8).collect();
    let samples: Vec<[u8; 16]> = (0..blocks_count)
        .map(|i| core::array::from_fn(|p| (i * 5 + p * 11) as u8))
        .collect();
    let signed: Vec<[i8; 16]> = samples
        .iter()
        .map(|s| s.map(|v| v as i8))
        .collect();

    group.throughput(criterion::Throughput::Bytes(bc4_size as u64));

    group.bench_function("decode_unorm_channel", |b| {
        b.iter(|| {
            for block in input.chunks_exact(8) {
                let block: &[u8; 8] = block.try_into().unwrap();
                black_box(decode_unorm_channel(black_box(block)));
            }
        })
    });

    group.bench_function("encode_unorm_channel", |b| {
        b.iter(|| {
            for values in &samples {
                black_box(encode_unorm_channel(black_box(values), None));
            }
        })
    });

    group.bench_function("encode_snorm_channel", |b| {
        b.iter(|| {
            for values in &signed {
                black_box(encode_snorm_channel(black_box(values)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
