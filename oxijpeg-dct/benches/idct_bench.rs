//! Performance benchmarks for oxijpeg-dct

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use oxijpeg_dct::{DCT_WIDTH, inverse_dct};
use std::hint::black_box;

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("idct");

    let mut seed: u64 = 0x123456789ABCDEF0;
    let block: Vec<f64> = (0..DCT_WIDTH * DCT_WIDTH)
        .map(|_| {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((seed >> 40) % 256) as f64 - 128.0
        })
        .collect();

    group.throughput(Throughput::Elements(1));
    group.bench_function("block_8x8", |b| {
        let mut output = vec![0.0; DCT_WIDTH * DCT_WIDTH];
        b.iter(|| {
            let mut input = block.clone();
            inverse_dct(black_box(&mut input), &mut output).unwrap();
            black_box(&output);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_inverse);
criterion_main!(benches);
