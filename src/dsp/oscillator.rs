use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Tone Generator
==============

A phase accumulator plus a waveform lookup. Phase runs from 0.0 to 1.0 once
per cycle; each sample it advances by frequency / sample_rate.

    phase:  0.0 ──→ 0.25 ──→ 0.5 ──→ 0.75 ──→ 1.0 (wraps to 0.0)

Detune
------

Pitch offsets arrive in cents (1/100 of a semitone, 1200 per octave) and are
applied per sample:

    f = frequency × 2^(cents / 1200)

    +1200 cents → one octave up (×2)
     +100 cents → one semitone up (×1.0595)
      -10 cents → slightly flat

This is the input the unison processor drives: every voice slot renders the
same base frequency with its own detune curve.

Waveforms are naive (not band-limited). At high pitches saw and square will
alias; the section levels keep that well below full scale.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Square,
    Triangle,
}

impl Waveform {
    #[inline]
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Saw => 2.0 * phase - 1.0,
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        }
    }
}

pub struct Oscillator {
    waveform: Waveform,
    phase: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    fn advance(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let out = self.waveform.sample(self.phase);
        let frequency = frequency.clamp(0.0, sample_rate * 0.5);
        self.phase = (self.phase + frequency / sample_rate).fract();
        out
    }

    /// Render at `frequency` with a per-sample detune curve in cents.
    pub fn render(&mut self, out: &mut [f32], frequency: f32, detune_cents: &[f32], sample_rate: f32) {
        debug_assert_eq!(out.len(), detune_cents.len());

        for (sample, &cents) in out.iter_mut().zip(detune_cents.iter()) {
            let detuned = frequency * (cents / 1200.0).exp2();
            *sample = self.advance(detuned, sample_rate);
        }
    }

    /// Render at a constant frequency.
    pub fn render_fixed(&mut self, out: &mut [f32], frequency: f32, sample_rate: f32) {
        for sample in out.iter_mut() {
            *sample = self.advance(frequency, sample_rate);
        }
    }
}
