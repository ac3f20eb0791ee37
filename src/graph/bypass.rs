use crate::{
    control::BypassSwitch,
    dsp::mix::{blend, crossfade_in_place},
};

/*
Bypass
======

Every section ends in a bypass gate with two paths into the same
destination:

                 ┌──────────────┐
    input ──┬──→ │  processing  │ ──→ × processed ───┐
            │    └──────────────┘                    (+) ──→ output
            └──────────────────────→ × passthrough ──┘

The gate never disconnects anything; it only moves two gains. Downstream
nodes always see one continuous signal, whatever the switch says.

    switch       processed   passthrough
    DISABLED        1.0          0.0       (section active)
    ENABLED         0.0          1.0       (section bypassed)

The gains always sum to 1.0. In steady state exactly one of them is 1.0.

For sound sources there is no input, so the passthrough path carries
silence and engaging the bypass simply mutes the section.

Switching
---------

By default the switch is instantaneous: the new gains apply from the first
sample of the next block. That can click on loud material. A non-zero ramp
length moves the processed gain linearly toward its target over that many
samples instead, keeping passthrough = 1 - processed throughout and landing
exactly on 0.0 / 1.0.
*/

/// Gain pair applied by a bypass gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BypassGains {
    pub processed: f32,
    pub passthrough: f32,
}

impl BypassGains {
    pub const ACTIVE: Self = Self {
        processed: 1.0,
        passthrough: 0.0,
    };

    pub const BYPASSED: Self = Self {
        processed: 0.0,
        passthrough: 1.0,
    };

    /// Steady-state gains for a switch position.
    pub fn for_state(enabled: bool) -> Self {
        if enabled {
            Self::BYPASSED
        } else {
            Self::ACTIVE
        }
    }
}

pub struct BypassNode {
    switch: BypassSwitch,
    ramp_samples: u32,
    processed_gain: f32,
}

impl BypassNode {
    /// Instantaneous gate.
    pub fn new(switch: BypassSwitch) -> Self {
        Self::with_ramp(switch, 0)
    }

    /// Gate that fades between paths over `ramp_samples` samples.
    pub fn with_ramp(switch: BypassSwitch, ramp_samples: u32) -> Self {
        let processed_gain = BypassGains::for_state(switch.is_enabled()).processed;
        Self {
            switch,
            ramp_samples,
            processed_gain,
        }
    }

    pub fn switch(&self) -> &BypassSwitch {
        &self.switch
    }

    /// Gains as of the last rendered sample.
    pub fn gains(&self) -> BypassGains {
        BypassGains {
            processed: self.processed_gain,
            passthrough: 1.0 - self.processed_gain,
        }
    }

    fn target(&self) -> f32 {
        BypassGains::for_state(self.switch.is_enabled()).processed
    }

    #[inline]
    fn step_toward(&mut self, target: f32, step: f32) -> f32 {
        self.processed_gain = if target > self.processed_gain {
            (self.processed_gain + step).min(target)
        } else {
            (self.processed_gain - step).max(target)
        };
        self.processed_gain
    }

    /// Gate a processed block (`out`) against its dry input.
    pub fn apply(&mut self, out: &mut [f32], passthrough: &[f32]) {
        debug_assert_eq!(out.len(), passthrough.len());

        let target = self.target();
        if self.ramp_samples == 0 || self.processed_gain == target {
            self.processed_gain = target;
            crossfade_in_place(out, passthrough, target);
            return;
        }

        let step = 1.0 / self.ramp_samples as f32;
        for (o, &dry) in out.iter_mut().zip(passthrough.iter()) {
            let gain = self.step_toward(target, step);
            *o = blend(*o, dry, gain);
        }
    }

    /// Gate a source block whose passthrough path is silent.
    pub fn apply_silent(&mut self, out: &mut [f32]) {
        let target = self.target();
        if self.ramp_samples == 0 || self.processed_gain == target {
            self.processed_gain = target;
            if target == 0.0 {
                out.fill(0.0);
            }
            return;
        }

        let step = 1.0 / self.ramp_samples as f32;
        for o in out.iter_mut() {
            *o *= self.step_toward(target, step);
        }
    }
}
