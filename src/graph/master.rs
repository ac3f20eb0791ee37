use crate::{
    control::{BypassSwitch, Param},
    dsp::amplify::apply_gain,
    graph::{
        bypass::BypassNode,
        node::{param_name, GraphNode, RenderCtx, SectionControls},
    },
};

/// Parameter handles and bypass switch for the master bus.
///
/// The master has no upstream passthrough, so engaging its bypass mutes the
/// whole synth.
#[derive(Debug, Clone)]
pub struct MasterControls {
    pub volume: Param,
    pub bypass: BypassSwitch,
}

impl MasterControls {
    pub const SECTION: &'static str = "master";

    pub fn new() -> Self {
        Self {
            volume: Param::with_range(param_name(Self::SECTION, "volume"), 0.8, 0.0, 1.0),
            bypass: BypassSwitch::default(),
        }
    }
}

impl Default for MasterControls {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionControls for MasterControls {
    fn section(&self) -> &'static str {
        Self::SECTION
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.volume]
    }

    fn bypass(&self) -> &BypassSwitch {
        &self.bypass
    }
}

/// Final gain stage; also spreads the mono mix over the device channels.
pub struct MasterBus {
    controls: MasterControls,
    bypass: BypassNode,
}

impl MasterBus {
    pub fn new(controls: MasterControls, ramp_samples: u32) -> Self {
        let bypass = BypassNode::with_ramp(controls.bypass.clone(), ramp_samples);
        Self { controls, bypass }
    }

    pub fn controls(&self) -> &MasterControls {
        &self.controls
    }

    /// Copy a mono block into `frames` interleaved frames of `channels`.
    pub fn write_interleaved(block: &[f32], data: &mut [f32], channels: usize) {
        debug_assert_eq!(data.len(), block.len() * channels);

        for (frame, &sample) in data.chunks_exact_mut(channels).zip(block.iter()) {
            frame.fill(sample);
        }
    }

    /// Copy a mono block into the same range of every planar channel.
    pub fn write_planar(block: &[f32], channels: &mut [Vec<f32>], offset: usize) {
        for channel in channels.iter_mut() {
            channel[offset..offset + block.len()].copy_from_slice(block);
        }
    }
}

impl GraphNode for MasterBus {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        apply_gain(out, self.controls.volume.value());
        self.bypass.apply_silent(out);
    }
}
