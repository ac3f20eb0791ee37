//! Full engine render at increasing unison widths.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use salvation::{
    io::{AudioInput, AudioOutput},
    Engine, EngineConfig,
};

use crate::BLOCK_SIZES;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");
    let input = AudioInput::default();

    for &size in BLOCK_SIZES {
        for voices in [1.0f32, 4.0, 16.0] {
            let config = EngineConfig {
                block_size: size,
                ..Default::default()
            };
            let (mut engine, controls) = Engine::build(config).expect("valid config");
            controls.osc_a.voices.set_value(voices);
            controls.osc_b.voices.set_value(voices);
            controls.osc_a.detune.set_value(12.0);
            controls.osc_b.detune.set_value(-9.0);

            let mut output = AudioOutput::new(2, size);
            let id = BenchmarkId::new(format!("stereo_{}v", voices as usize), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| engine.process(black_box(&input), black_box(&mut output)))
            });
        }
    }

    group.finish();
}
