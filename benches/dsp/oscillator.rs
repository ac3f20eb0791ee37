//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use salvation::dsp::oscillator::{Oscillator, Waveform};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    let waveforms = [
        ("sine", Waveform::Sine),
        ("saw", Waveform::Saw),
        ("square", Waveform::Square),
        ("triangle", Waveform::Triangle),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let detune = vec![7.0f32; size];

        for (name, waveform) in waveforms {
            // Fixed pitch - no per-sample exp2
            let mut osc = Oscillator::new(waveform);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    osc.render_fixed(black_box(&mut buffer), black_box(440.0), SAMPLE_RATE);
                })
            });
        }

        // Detuned saw - pitch recomputed per sample from the cents curve
        let mut osc = Oscillator::new(Waveform::Saw);
        group.bench_with_input(BenchmarkId::new("saw_detuned", size), &size, |b, _| {
            b.iter(|| {
                osc.render(
                    black_box(&mut buffer),
                    black_box(440.0),
                    black_box(&detune),
                    SAMPLE_RATE,
                );
            })
        });
    }

    group.finish();
}
