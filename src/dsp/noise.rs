//! White noise source.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/*
White Noise
===========

White noise is a stream of independent random samples. Every frequency gets
the same average energy, which is why it sounds like a flat hiss.

Each sample here is drawn uniformly from [-1.0, 1.0):

    mean      0
    variance  1/3   (uniform over a width-2 interval: 2² / 12)
    peak      never reaches +1.0

The generator keeps no signal state between blocks; the only state is the
RNG itself. `SmallRng` is a fast non-cryptographic generator, which is all an
audio source needs. Seed it explicitly when a test needs repeatable output.
*/

pub struct WhiteNoise {
    rng: SmallRng,
}

impl WhiteNoise {
    /// Seeded from OS entropy, so every instance hisses differently.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0f32..1.0)
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Fill every channel with its own independent noise.
    pub fn render_channels(&mut self, channels: &mut [&mut [f32]]) {
        for channel in channels.iter_mut() {
            self.render(channel);
        }
    }
}

impl Default for WhiteNoise {
    fn default() -> Self {
        Self::new()
    }
}
