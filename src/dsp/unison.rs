//! Unison voice processor.

use crate::MAX_UNISON_VOICES;

/*
Unison
======

Unison stacks N copies of the same oscillator and spreads their pitch a
little, so the copies drift in and out of phase and the sum sounds wide and
thick instead of like a single tone.

Each voice slot gets a processor with a fixed index. Every block it turns the
current `detune`, `blend` and `voices` values into two curves:

    detune[i]   pitch offset in cents, fed to the slot oscillator
    gain[i]     linear gain applied to the slot oscillator output


Placing Voices
--------------

Voices are placed symmetrically around the middle of the stack:

    center = (N - 1) / 2
    offset = index - center
    spread = offset / max(1, center)

`spread` runs from -1.0 for the lowest voice to +1.0 for the highest, so the
`detune` amount is the distance (in cents) of the outermost voices from the
base pitch, whatever N is:

    N = 4, detune = 10

    index     0        1        2        3
    offset   -1.5     -0.5     +0.5     +1.5
    spread   -1.0     -0.33    +0.33    +1.0
    cents   -10.0    -3.33    +3.33   +10.0

`max(1, center)` keeps the division defined for N = 1 and N = 2, where the
center is 0 or 0.5.


Center Voices and Blend
-----------------------

The voice (odd N) or pair of voices (even N) closest to the middle are the
"center" voices: the ones with |offset| < 1. They always play at full level.
Every other voice plays at `blend`, so blend = 0 collapses the stack back to
its center and blend = 1 gives every voice equal weight.

    N = 5: offsets -2 -1 [0] +1 +2      one center voice
    N = 4: offsets -1.5 [-0.5 +0.5] +1.5  two center voices


Loudness Normalization
----------------------

All gains are divided by N. With blend = 1 the voice gains always sum to 1,
so adding voices thickens the sound without making it louder.

    N = 1:  1/1                         = 1.0
    N = 4:  1/4 + 1/4 + 1/4 + 1/4       = 1.0
    N = 16: 16 × 1/16                   = 1.0


Inactive Slots
--------------

Oscillator sections always own 16 slots so the graph never changes shape
while audio runs. Slots with index >= N write exact zeros to both curves.
*/

/// A per-sample control input: either one value for the whole block or one
/// value per sample.
#[derive(Debug, Clone, Copy)]
pub enum ParamInput<'a> {
    Uniform(f32),
    PerSample(&'a [f32]),
}

impl ParamInput<'_> {
    /// Value for sample `i`.
    ///
    /// A per-sample slice shorter than the block repeats its first value for
    /// the samples it does not cover; an empty slice reads as 0.
    #[inline]
    pub fn at(&self, i: usize) -> f32 {
        match *self {
            ParamInput::Uniform(value) => value,
            ParamInput::PerSample(values) => match values.get(i) {
                Some(&value) => value,
                None => values.first().copied().unwrap_or(0.0),
            },
        }
    }
}

impl From<f32> for ParamInput<'_> {
    fn from(value: f32) -> Self {
        ParamInput::Uniform(value)
    }
}

impl<'a> From<&'a [f32]> for ParamInput<'a> {
    fn from(values: &'a [f32]) -> Self {
        ParamInput::PerSample(values)
    }
}

/// Turn a raw `voices` parameter value into a usable voice count.
///
/// Fractions are floored; NaN and anything below 1 become 1; anything above
/// the slot count becomes the slot count.
pub fn clamp_voice_count(count: f32) -> usize {
    if count.is_nan() {
        return 1;
    }
    count.floor().clamp(1.0, MAX_UNISON_VOICES as f32) as usize
}

/// Where one voice sits in a stack of `voice_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnisonCurve {
    /// Normalized position, -1.0 (lowest voice) to +1.0 (highest voice).
    pub spread: f32,
    /// Whether this voice ignores `blend` and plays at full level.
    pub is_center: bool,
}

impl UnisonCurve {
    /// `None` when the voice is outside the active stack.
    pub fn for_voice(index: usize, voice_count: usize) -> Option<Self> {
        if index >= voice_count {
            return None;
        }
        let center = (voice_count as f32 - 1.0) * 0.5;
        let offset = index as f32 - center;

        Some(Self {
            spread: offset / center.max(1.0),
            is_center: offset.abs() < 1.0,
        })
    }
}

/// Computes detune and gain curves for one fixed voice slot.
#[derive(Debug, Clone, Copy)]
pub struct UnisonVoice {
    index: usize,
}

impl UnisonVoice {
    pub fn new(index: usize) -> Self {
        debug_assert!(index < MAX_UNISON_VOICES, "voice index out of range");
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Fill `detune_out` (cents) and `gain_out` (linear) for one block.
    ///
    /// `voice_count` is the raw `voices` parameter value and is clamped with
    /// [`clamp_voice_count`]. Returns whether the voice is active; inactive
    /// voices get all-zero curves.
    pub fn process(
        &self,
        detune: ParamInput<'_>,
        blend: ParamInput<'_>,
        voice_count: f32,
        detune_out: &mut [f32],
        gain_out: &mut [f32],
    ) -> bool {
        debug_assert_eq!(detune_out.len(), gain_out.len());

        let count = clamp_voice_count(voice_count);
        let Some(curve) = UnisonCurve::for_voice(self.index, count) else {
            detune_out.fill(0.0);
            gain_out.fill(0.0);
            return false;
        };

        for (i, out) in detune_out.iter_mut().enumerate() {
            *out = curve.spread * detune.at(i);
        }

        let norm = 1.0 / count as f32;
        if curve.is_center {
            gain_out.fill(norm);
        } else {
            for (i, out) in gain_out.iter_mut().enumerate() {
                *out = blend.at(i) * norm;
            }
        }

        true
    }
}
