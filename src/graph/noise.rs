use crate::{
    control::{BypassSwitch, Param},
    dsp::{amplify::apply_gain, noise::WhiteNoise},
    graph::{
        bypass::BypassNode,
        node::{param_name, GraphNode, RenderCtx, SectionControls},
    },
};

/// Parameter handles and bypass switch for the noise section.
#[derive(Debug, Clone)]
pub struct NoiseControls {
    pub level: Param,
    pub bypass: BypassSwitch,
}

impl NoiseControls {
    pub const SECTION: &'static str = "noise";

    pub fn new() -> Self {
        Self {
            level: Param::with_range(param_name(Self::SECTION, "level"), 0.1, 0.0, 1.0),
            bypass: BypassSwitch::default(),
        }
    }
}

impl Default for NoiseControls {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionControls for NoiseControls {
    fn section(&self) -> &'static str {
        Self::SECTION
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.level]
    }

    fn bypass(&self) -> &BypassSwitch {
        &self.bypass
    }
}

pub struct NoiseSection {
    controls: NoiseControls,
    noise: WhiteNoise,
    bypass: BypassNode,
}

impl NoiseSection {
    pub fn new(controls: NoiseControls, ramp_samples: u32) -> Self {
        Self::with_source(controls, WhiteNoise::new(), ramp_samples)
    }

    /// Use a specific generator, e.g. a seeded one.
    pub fn with_source(controls: NoiseControls, noise: WhiteNoise, ramp_samples: u32) -> Self {
        let bypass = BypassNode::with_ramp(controls.bypass.clone(), ramp_samples);
        Self {
            controls,
            noise,
            bypass,
        }
    }

    pub fn controls(&self) -> &NoiseControls {
        &self.controls
    }
}

impl GraphNode for NoiseSection {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        self.noise.render(out);
        apply_gain(out, self.controls.level.value());
        self.bypass.apply_silent(out);
    }
}
