use crate::{
    control::{BypassSwitch, Param},
    dsp::{
        amplify::{apply_gain, multiply_accumulate},
        oscillator::{Oscillator, Waveform},
        unison::{clamp_voice_count, ParamInput, UnisonVoice},
    },
    graph::{
        bypass::BypassNode,
        node::{param_name, GraphNode, RenderCtx, SectionControls},
    },
    MAX_BLOCK_SIZE, MAX_UNISON_VOICES,
};

/*
Oscillator Voice Bank
=====================

One oscillator section = sixteen permanently allocated voice slots.

    frequency ─────────────────────────────┐
    detune ──┐                             │
    blend  ──┼──→ [unison i] ─ detune[] ──→ [osc i] ──→ (×) ──┐
    voices ──┘          └───── gain[] ────────────────────┘   │
                                                               ▼
                                  slot 0..15 ──────────→ (+) mix bus
                                                               │
                                                   × level ────┤
                                                               ▼
                                                           [bypass] ──→ out

Why sixteen slots instead of spawning voices on demand? Changing the shape of
the graph while the audio thread is running means allocation or locking in
the callback. Instead the topology is fixed and the `voices` parameter only
decides which slots produce signal: slots at index >= voices get zero gain
and are skipped entirely.

Parameters are sampled once per block (zero-order hold) and handed to the
unison processors as uniform inputs.
*/

/// Parameter handles and bypass switch for one oscillator section.
#[derive(Debug, Clone)]
pub struct OscillatorControls {
    section: &'static str,
    /// Base pitch in Hz.
    pub frequency: Param,
    /// Distance of the outermost voices from the base pitch, in cents.
    pub detune: Param,
    /// Level of the non-center voices relative to the center, 0..1.
    pub blend: Param,
    /// Active voice count, 1..16.
    pub voices: Param,
    /// Section output level.
    pub level: Param,
    pub bypass: BypassSwitch,
}

impl OscillatorControls {
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            frequency: Param::with_range(param_name(section, "frequency"), 440.0, 0.0, 20_000.0),
            detune: Param::with_range(param_name(section, "detune"), 0.0, -1200.0, 1200.0),
            blend: Param::with_range(param_name(section, "blend"), 0.5, 0.0, 1.0),
            voices: Param::with_range(
                param_name(section, "voices"),
                1.0,
                1.0,
                MAX_UNISON_VOICES as f32,
            ),
            level: Param::with_range(param_name(section, "level"), 0.5, 0.0, 1.0),
            bypass: BypassSwitch::default(),
        }
    }
}

impl SectionControls for OscillatorControls {
    fn section(&self) -> &'static str {
        self.section
    }

    fn params(&self) -> Vec<&Param> {
        vec![
            &self.frequency,
            &self.detune,
            &self.blend,
            &self.voices,
            &self.level,
        ]
    }

    fn bypass(&self) -> &BypassSwitch {
        &self.bypass
    }
}

struct VoiceSlot {
    unison: UnisonVoice,
    osc: Oscillator,
    detune: Vec<f32>,
    gain: Vec<f32>,
}

impl VoiceSlot {
    fn new(index: usize, waveform: Waveform) -> Self {
        Self {
            unison: UnisonVoice::new(index),
            osc: Oscillator::new(waveform),
            detune: vec![0.0; MAX_BLOCK_SIZE],
            gain: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

pub struct VoiceBank {
    controls: OscillatorControls,
    slots: [VoiceSlot; MAX_UNISON_VOICES],
    bypass: BypassNode,
    voice_buffer: Vec<f32>,
    last_block_len: usize,
}

impl VoiceBank {
    pub fn new(waveform: Waveform, controls: OscillatorControls, ramp_samples: u32) -> Self {
        let bypass = BypassNode::with_ramp(controls.bypass.clone(), ramp_samples);
        Self {
            controls,
            slots: std::array::from_fn(|index| VoiceSlot::new(index, waveform)),
            bypass,
            voice_buffer: vec![0.0; MAX_BLOCK_SIZE],
            last_block_len: 0,
        }
    }

    pub fn controls(&self) -> &OscillatorControls {
        &self.controls
    }

    pub fn bypass(&self) -> &BypassNode {
        &self.bypass
    }

    /// Always [`MAX_UNISON_VOICES`]; inactive slots stay allocated.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Detune (cents) and gain curves slot `index` produced in the last block.
    pub fn voice_curves(&self, index: usize) -> Option<(&[f32], &[f32])> {
        let slot = self.slots.get(index)?;
        let len = self.last_block_len;
        Some((&slot.detune[..len], &slot.gain[..len]))
    }

    /// Voice count the next block will use.
    pub fn active_voices(&self) -> usize {
        clamp_voice_count(self.controls.voices.value())
    }
}

impl GraphNode for VoiceBank {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let len = out.len();
        debug_assert!(len <= MAX_BLOCK_SIZE, "block larger than MAX_BLOCK_SIZE");

        let frequency = self.controls.frequency.value();
        let detune = ParamInput::Uniform(self.controls.detune.value());
        let blend = ParamInput::Uniform(self.controls.blend.value());
        let voices = self.controls.voices.value();
        let level = self.controls.level.value();

        out.fill(0.0);
        for slot in self.slots.iter_mut() {
            let detune_curve = &mut slot.detune[..len];
            let gain_curve = &mut slot.gain[..len];
            if !slot.unison.process(detune, blend, voices, detune_curve, gain_curve) {
                continue;
            }

            let voice = &mut self.voice_buffer[..len];
            slot.osc.render(voice, frequency, detune_curve, ctx.sample_rate);
            multiply_accumulate(out, voice, gain_curve);
        }
        self.last_block_len = len;

        apply_gain(out, level);
        self.bypass.apply_silent(out);
    }
}
