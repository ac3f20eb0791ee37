//! Benchmarks for unison detune/gain curve generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use salvation::dsp::unison::{ParamInput, UnisonVoice};

use crate::BLOCK_SIZES;

pub fn bench_unison(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/unison");

    for &size in BLOCK_SIZES {
        let mut detune_out = vec![0.0f32; size];
        let mut gain_out = vec![0.0f32; size];
        let detune_in = vec![15.0f32; size];
        let blend_in = vec![0.5f32; size];

        // Uniform inputs - the engine's per-block path
        let voice = UnisonVoice::new(3);
        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, _| {
            b.iter(|| {
                voice.process(
                    black_box(ParamInput::Uniform(15.0)),
                    black_box(ParamInput::Uniform(0.5)),
                    black_box(8.0),
                    &mut detune_out,
                    &mut gain_out,
                )
            })
        });

        // Per-sample inputs
        group.bench_with_input(BenchmarkId::new("per_sample", size), &size, |b, _| {
            b.iter(|| {
                voice.process(
                    black_box(ParamInput::PerSample(&detune_in)),
                    black_box(ParamInput::PerSample(&blend_in)),
                    black_box(8.0),
                    &mut detune_out,
                    &mut gain_out,
                )
            })
        });

        // Inactive slot - early zero fill
        let idle = UnisonVoice::new(15);
        group.bench_with_input(BenchmarkId::new("inactive", size), &size, |b, _| {
            b.iter(|| {
                idle.process(
                    black_box(ParamInput::Uniform(15.0)),
                    black_box(ParamInput::Uniform(0.5)),
                    black_box(2.0),
                    &mut detune_out,
                    &mut gain_out,
                )
            })
        });
    }

    group.finish();
}
