use criterion::{criterion_group, criterion_main, Criterion};
use dxt_block_codec_bc1::{decode_bc1_block, encode_bc1_block, AlphaHandling};
use dxt_block_codec_common::color_8888::Color8888;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Blocks");

    // 1MB of BC1 blocks
    let bc1_size = 1048576;
    let blocks_count = bc1_size / 8;

    // Simple pattern for BC1 blocks; real-world data would have more variety.
    let input: Vec<u8> = (0..bc1_size).map(|i| (i % 255) as u8).collect();
    let pixels: Vec<Decoded4x4Block> = (0..blocks_count)
        .map(|i| {
            let mut block = Decoded4x4Block::default();
            for (p, pixel) in block.pixels.iter_mut().enumerate() {
                let v = (i * 7 + p * 13) as u8;
                *pixel = Color8888::new(v, v.wrapping_mul(3), 255 - v, v | 0x0F);
            }
            block
        })
        .collect();

    group.throughput(criterion::Throughput::Bytes(bc1_size as u64));

    group.bench_function("decode_bc1_blocks", |b| {
        b.iter(|| {
            for block in input.chunks_exact(8) {
                let block: &[u8; 8] = block.try_into().unwrap();
                black_box(decode_bc1_block(black_box(block)));
            }
        })
    });

    group.bench_function("encode_bc1_blocks_opaque", |b| {
        b.iter(|| {
            for block in &pixels {
                black_box(encode_bc1_block(black_box(block), AlphaHandling::ForceOpaque));
            }
        })
    });

    group.bench_function("encode_bc1_blocks_punch_through", |b| {
        b.iter(|| {
            for block in &pixels {
                black_box(encode_bc1_block(
                    black_box(block),
                    AlphaHandling::PunchThrough { threshold: 128 },
                ));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
