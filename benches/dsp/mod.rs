//! Benchmarks for low-level DSP primitives.

mod noise;
mod oscillator;
mod unison;

pub use noise::bench_noise;
pub use oscillator::bench_oscillator;
pub use unison::bench_unison;
