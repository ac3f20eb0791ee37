//! Benchmarks for white noise generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use salvation::dsp::noise::WhiteNoise;

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut mono = vec![0.0f32; size];
        let mut noise = WhiteNoise::with_seed(1);
        group.bench_with_input(BenchmarkId::new("mono", size), &size, |b, _| {
            b.iter(|| noise.render(black_box(&mut mono)))
        });

        let mut left = vec![0.0f32; size];
        let mut right = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                let mut channels = [left.as_mut_slice(), right.as_mut_slice()];
                noise.render_channels(black_box(&mut channels));
            })
        });
    }

    group.finish();
}
