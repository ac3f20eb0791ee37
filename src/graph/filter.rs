use crate::{
    control::{BypassSwitch, Param},
    graph::{
        bypass::BypassNode,
        node::{param_name, GraphNode, RenderCtx, SectionControls},
    },
    MAX_BLOCK_SIZE,
};

/*
Filter Section
==============

The filter sits between the source bus and the master:

    sources ──→ (+) bus ──┬──→ [filter stage] ──→ × processed ───┐
                          │                                      (+) ──→ master
                          └────────────────────→ × passthrough ──┘

Only the wiring is implemented: cutoff and resonance are exposed and sampled
every block, and the bypass gate routes between the two paths, but the filter
stage itself is a unity stage. Engaging or releasing the bypass is therefore
inaudible for now; it becomes meaningful once a filter response is dropped
into `process_stage`.
*/

/// Parameter values the filter stage saw on its last block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    pub cutoff_hz: f32,
    pub resonance: f32,
}

/// Parameter handles and bypass switch for the filter section.
#[derive(Debug, Clone)]
pub struct FilterControls {
    pub cutoff: Param,
    pub resonance: Param,
    pub bypass: BypassSwitch,
}

impl FilterControls {
    pub const SECTION: &'static str = "filter";

    pub fn new() -> Self {
        Self {
            cutoff: Param::with_range(param_name(Self::SECTION, "cutoff"), 20_000.0, 20.0, 20_000.0),
            resonance: Param::with_range(param_name(Self::SECTION, "resonance"), 0.0, 0.0, 1.0),
            bypass: BypassSwitch::default(),
        }
    }
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionControls for FilterControls {
    fn section(&self) -> &'static str {
        Self::SECTION
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.cutoff, &self.resonance]
    }

    fn bypass(&self) -> &BypassSwitch {
        &self.bypass
    }
}

pub struct FilterSection {
    controls: FilterControls,
    bypass: BypassNode,
    dry: Vec<f32>,
    settings: FilterSettings,
}

impl FilterSection {
    pub fn new(controls: FilterControls, ramp_samples: u32) -> Self {
        let bypass = BypassNode::with_ramp(controls.bypass.clone(), ramp_samples);
        let settings = FilterSettings {
            cutoff_hz: controls.cutoff.value(),
            resonance: controls.resonance.value(),
        };
        Self {
            controls,
            bypass,
            dry: vec![0.0; MAX_BLOCK_SIZE],
            settings,
        }
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn settings(&self) -> FilterSettings {
        self.settings
    }

    pub fn bypass(&self) -> &BypassNode {
        &self.bypass
    }

    // Unity response.
    fn process_stage(&mut self, _block: &mut [f32]) {}
}

impl GraphNode for FilterSection {
    fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
        let len = out.len();
        debug_assert!(len <= MAX_BLOCK_SIZE, "block larger than MAX_BLOCK_SIZE");

        self.settings = FilterSettings {
            cutoff_hz: self.controls.cutoff.value(),
            resonance: self.controls.resonance.value(),
        };

        self.dry[..len].copy_from_slice(out);
        self.process_stage(out);
        self.bypass.apply(out, &self.dry[..len]);
    }
}
