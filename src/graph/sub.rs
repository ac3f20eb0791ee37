use crate::{
    control::{BypassSwitch, Param},
    dsp::{
        amplify::apply_gain,
        oscillator::{Oscillator, Waveform},
    },
    graph::{
        bypass::BypassNode,
        node::{param_name, GraphNode, RenderCtx, SectionControls},
    },
};

/// Parameter handles and bypass switch for the sub oscillator.
#[derive(Debug, Clone)]
pub struct SubControls {
    pub frequency: Param,
    pub level: Param,
    pub bypass: BypassSwitch,
}

impl SubControls {
    pub const SECTION: &'static str = "sub";

    pub fn new() -> Self {
        Self {
            frequency: Param::with_range(param_name(Self::SECTION, "frequency"), 55.0, 0.0, 2_000.0),
            level: Param::with_range(param_name(Self::SECTION, "level"), 0.5, 0.0, 1.0),
            bypass: BypassSwitch::default(),
        }
    }
}

impl Default for SubControls {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionControls for SubControls {
    fn section(&self) -> &'static str {
        Self::SECTION
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.frequency, &self.level]
    }

    fn bypass(&self) -> &BypassSwitch {
        &self.bypass
    }
}

/// A single sine oscillator for low-end weight.
pub struct SubSection {
    controls: SubControls,
    osc: Oscillator,
    bypass: BypassNode,
}

impl SubSection {
    pub fn new(controls: SubControls, ramp_samples: u32) -> Self {
        let bypass = BypassNode::with_ramp(controls.bypass.clone(), ramp_samples);
        Self {
            controls,
            osc: Oscillator::new(Waveform::Sine),
            bypass,
        }
    }

    pub fn controls(&self) -> &SubControls {
        &self.controls
    }
}

impl GraphNode for SubSection {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc
            .render_fixed(out, self.controls.frequency.value(), ctx.sample_rate);
        apply_gain(out, self.controls.level.value());
        self.bypass.apply_silent(out);
    }
}
