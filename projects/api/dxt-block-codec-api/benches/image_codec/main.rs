use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dxt_block_codec_api::{decode_image, encode_image, BlockFormat, EncodeSettings, RgbaImage};
use std::hint::black_box;

const WIDTH: u32 = 512;
const HEIGHT: u32 = 512;

fn generate_image() -> RgbaImage {
    let mut data = Vec::with_capacity((WIDTH * HEIGHT * 4) as usize);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let v = (x ^ y) as u8;
            data.extend_from_slice(&[v, (x / 2) as u8, (y / 2) as u8, v | 0x0F]);
        }
    }
    // Dimensions and buffer length always agree here.
    RgbaImage::new(WIDTH, HEIGHT, data).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let image = generate_image();
    let settings = EncodeSettings::default();

    let mut group = c.benchmark_group("Image Codec");
    group.throughput(criterion::Throughput::Bytes(image.as_bytes().len() as u64));

    for format in [
        BlockFormat::Bc1,
        BlockFormat::Bc3,
        BlockFormat::Bc4,
        BlockFormat::Bc5Signed,
    ] {
        group.bench_with_input(BenchmarkId::new("encode", format), &format, |b, format| {
            b.iter(|| black_box(encode_image(black_box(&image), *format, &settings).unwrap()))
        });

        let encoded = encode_image(&image, format, &settings).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", format), &format, |b, format| {
            b.iter(|| black_box(decode_image(black_box(&encoded), WIDTH, HEIGHT, *format).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
