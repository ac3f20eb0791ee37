//! Audio device host built on cpal.

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, SampleFormat, Stream, SupportedStreamConfig,
};
use tracing::{error, info};

use crate::{
    error::EngineError,
    synth::{Engine, EngineConfig},
};

/// The default output device and its preferred stream config.
///
/// Opening fails loudly: a missing device or unusable config is an
/// [`EngineError`], and the engine should not be built for it.
pub struct AudioHost {
    device: Device,
    config: SupportedStreamConfig,
}

impl AudioHost {
    pub fn open_default() -> Result<Self, EngineError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| EngineError::Device("no default output device available".into()))?;
        let config = device.default_output_config()?;

        if config.sample_format() != SampleFormat::F32 {
            return Err(EngineError::Device(format!(
                "unsupported sample format {:?}, expected f32",
                config.sample_format()
            )));
        }

        info!(
            device = %device.name().unwrap_or_else(|_| "<unnamed>".into()),
            sample_rate = config.sample_rate().0,
            channels = config.channels(),
            "opened output device"
        );

        Ok(Self { device, config })
    }

    pub fn sample_rate(&self) -> f32 {
        self.config.sample_rate().0 as f32
    }

    pub fn channels(&self) -> usize {
        self.config.channels() as usize
    }

    /// Engine config matching this device.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            sample_rate: self.sample_rate(),
            channels: self.channels(),
            ..Default::default()
        }
    }

    /// Move the engine onto the audio thread and start playback.
    ///
    /// The returned stream plays until dropped.
    pub fn start(&self, mut engine: Engine) -> Result<Stream, EngineError> {
        let channels = self.channels();
        if engine.config().channels != channels || engine.config().sample_rate != self.sample_rate() {
            return Err(EngineError::InvalidConfig(format!(
                "engine built for {} ch @ {} Hz, device runs {} ch @ {} Hz",
                engine.config().channels,
                engine.config().sample_rate,
                channels,
                self.sample_rate()
            )));
        }

        let stream = self.device.build_output_stream(
            &self.config.clone().into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                engine.render_interleaved(data, channels);
            },
            |err| error!(%err, "audio stream error"),
            None,
        )?;
        stream.play()?;

        info!("audio stream started");
        Ok(stream)
    }
}
