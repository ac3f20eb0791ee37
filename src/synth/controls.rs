#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    control::{BypassSwitch, Param},
    error::EngineError,
    graph::{
        FilterControls, MasterControls, NoiseControls, OscillatorControls, SectionControls,
        SubControls,
    },
};

/// Every parameter and bypass switch of one engine.
///
/// Cheap to clone; all clones drive the same engine. Writes never block and
/// take effect at the next block boundary.
#[derive(Debug, Clone)]
pub struct Controls {
    pub master: MasterControls,
    pub filter: FilterControls,
    pub sub: SubControls,
    pub noise: NoiseControls,
    pub osc_a: OscillatorControls,
    pub osc_b: OscillatorControls,
}

/// Name and value of one parameter at the moment it was read.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSnapshot {
    pub name: String,
    pub value: f32,
}

impl Controls {
    pub(crate) fn new() -> Self {
        Self {
            master: MasterControls::new(),
            filter: FilterControls::new(),
            sub: SubControls::new(),
            noise: NoiseControls::new(),
            osc_a: OscillatorControls::new("osc_a"),
            osc_b: OscillatorControls::new("osc_b"),
        }
    }

    /// Sections in signal-flow order, sources first.
    pub fn sections(&self) -> [&dyn SectionControls; 6] {
        [
            &self.sub,
            &self.noise,
            &self.osc_a,
            &self.osc_b,
            &self.filter,
            &self.master,
        ]
    }

    pub fn section(&self, name: &str) -> Option<&dyn SectionControls> {
        self.sections().into_iter().find(|s| s.section() == name)
    }

    /// All parameters, section by section.
    pub fn params(&self) -> impl Iterator<Item = &Param> + '_ {
        self.sections().into_iter().flat_map(|s| s.params())
    }

    /// Look up a parameter by its full name, e.g. `"osc_a.detune"`.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params().find(|p| p.name() == name)
    }

    pub fn set_value(&self, name: &str, value: f32) -> Result<(), EngineError> {
        let Some(param) = self.param(name) else {
            warn!(param = name, "ignoring write to unknown parameter");
            return Err(EngineError::UnknownParam(name.to_owned()));
        };
        param.set_value(value);
        debug!(param = name, requested = value, stored = param.value(), "parameter set");
        Ok(())
    }

    pub fn bypass(&self, section: &str) -> Option<&BypassSwitch> {
        self.section(section).map(|s| s.bypass())
    }

    pub fn set_bypass(&self, section: &str, enabled: bool) -> Result<(), EngineError> {
        let Some(switch) = self.bypass(section) else {
            warn!(section, "ignoring bypass toggle for unknown section");
            return Err(EngineError::UnknownSection(section.to_owned()));
        };
        switch.set_enabled(enabled);
        debug!(section, enabled, "bypass set");
        Ok(())
    }

    /// Current value of every parameter.
    pub fn snapshot(&self) -> Vec<ParamSnapshot> {
        self.params()
            .map(|p| ParamSnapshot {
                name: p.name().to_owned(),
                value: p.value(),
            })
            .collect()
    }

    /// Put every parameter back to its default and release every bypass.
    pub fn reset(&self) {
        for section in self.sections() {
            for param in section.params() {
                param.reset();
            }
            section.bypass().set_enabled(false);
        }
    }
}
