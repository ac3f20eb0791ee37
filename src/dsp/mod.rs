//! Low-level DSP primitives used by the graph sections.
//!
//! Everything here is allocation-free and works on caller-owned slices, so it
//! can run directly inside the audio callback. Orchestration (which buffer
//! feeds which stage, which parameter is read when) lives in `graph`.

/// Gain and multiplication over sample blocks.
pub mod amplify;
/// Summing and crossfading.
pub mod mix;
/// Uniform white noise.
pub mod noise;
/// Phase-accumulating tone generator.
pub mod oscillator;
/// Per-voice detune and gain curves for unison stacks.
pub mod unison;

pub use oscillator::Waveform;
pub use unison::{ParamInput, UnisonVoice};
