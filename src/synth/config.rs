#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::Waveform, error::EngineError, MAX_BLOCK_SIZE};

/// Static engine settings, fixed for the lifetime of an [`Engine`](super::Engine).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Output sample rate in Hz.
    pub sample_rate: f32,
    /// Samples rendered per graph pass. Parameter changes land on these
    /// boundaries.
    pub block_size: usize,
    /// Output channel count; the mono mix is copied to each.
    pub channels: usize,
    /// Bypass crossfade length. 0 switches instantly.
    pub bypass_ramp_ms: f32,
    pub osc_a_waveform: Waveform,
    pub osc_b_waveform: Waveform,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            block_size: 512,
            channels: 2,
            bypass_ramp_ms: 0.0,
            osc_a_waveform: Waveform::Saw,
            osc_b_waveform: Waveform::Square,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "block size must be in 1..={MAX_BLOCK_SIZE}, got {}",
                self.block_size
            )));
        }
        if self.channels == 0 {
            return Err(EngineError::InvalidConfig(
                "at least one output channel is required".into(),
            ));
        }
        if !self.bypass_ramp_ms.is_finite() || self.bypass_ramp_ms < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "bypass ramp must be a non-negative duration, got {} ms",
                self.bypass_ramp_ms
            )));
        }
        Ok(())
    }

    /// Bypass ramp length in samples at this sample rate.
    pub fn bypass_ramp_samples(&self) -> u32 {
        (self.bypass_ramp_ms * 0.001 * self.sample_rate).round() as u32
    }
}
