use tracing::info;

#[cfg(feature = "rtrb")]
use crate::io::meter::MeterTap;
use crate::{
    dsp::mix::sum_in_place,
    error::EngineError,
    graph::{
        FilterSection, GraphNode, MasterBus, NoiseSection, RenderCtx, SubSection, VoiceBank,
    },
    io::{AudioInput, AudioOutput},
    synth::{config::EngineConfig, controls::Controls},
    MAX_BLOCK_SIZE,
};

/*
Engine
======

The engine owns the whole signal graph and renders it one block at a time:

    [sub]   ──┐
    [noise] ──┤
    [osc a] ──┼──→ (+) bus ──→ [filter] ──→ [master] ──→ channels
    [osc b] ──┘

The graph is built once in `Engine::build` and never changes shape. The
caller gets back a `Controls` value holding the parameter and bypass handles;
that is the only way to influence the engine after construction.

Blocks
------

Host callbacks can ask for any number of frames. The engine renders them in
chunks of `config.block_size` samples (at most MAX_BLOCK_SIZE). Every chunk
starts by reading each parameter once, so a control write becomes audible at
the next chunk boundary, not at an exact sample.

Nothing in the render path allocates, locks or logs: all scratch buffers are
sized to MAX_BLOCK_SIZE at construction.
*/

pub struct Engine {
    config: EngineConfig,
    ctx: RenderCtx,
    sub: SubSection,
    noise: NoiseSection,
    osc_a: VoiceBank,
    osc_b: VoiceBank,
    filter: FilterSection,
    master: MasterBus,
    block: Vec<f32>,
    scratch: Vec<f32>,
    frames_rendered: u64,
    #[cfg(feature = "rtrb")]
    meter: Option<MeterTap>,
}

impl Engine {
    /// Construct and wire every section, returning the engine and its
    /// control handles.
    pub fn build(config: EngineConfig) -> Result<(Self, Controls), EngineError> {
        config.validate()?;

        let controls = Controls::new();
        let ramp = config.bypass_ramp_samples();

        let engine = Self {
            ctx: RenderCtx::new(config.sample_rate),
            sub: SubSection::new(controls.sub.clone(), ramp),
            noise: NoiseSection::new(controls.noise.clone(), ramp),
            osc_a: VoiceBank::new(config.osc_a_waveform, controls.osc_a.clone(), ramp),
            osc_b: VoiceBank::new(config.osc_b_waveform, controls.osc_b.clone(), ramp),
            filter: FilterSection::new(controls.filter.clone(), ramp),
            master: MasterBus::new(controls.master.clone(), ramp),
            block: vec![0.0; MAX_BLOCK_SIZE],
            scratch: vec![0.0; MAX_BLOCK_SIZE],
            frames_rendered: 0,
            #[cfg(feature = "rtrb")]
            meter: None,
            config,
        };

        info!(
            sample_rate = engine.config.sample_rate,
            block_size = engine.config.block_size,
            channels = engine.config.channels,
            bypass_ramp_samples = ramp,
            "engine built"
        );

        Ok((engine, controls))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sub(&self) -> &SubSection {
        &self.sub
    }

    pub fn noise(&self) -> &NoiseSection {
        &self.noise
    }

    pub fn osc_a(&self) -> &VoiceBank {
        &self.osc_a
    }

    pub fn osc_b(&self) -> &VoiceBank {
        &self.osc_b
    }

    pub fn filter(&self) -> &FilterSection {
        &self.filter
    }

    pub fn master(&self) -> &MasterBus {
        &self.master
    }

    /// Total frames produced since construction.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Report per-block peaks through a lock-free meter.
    #[cfg(feature = "rtrb")]
    pub fn attach_meter(&mut self, tap: MeterTap) {
        self.meter = Some(tap);
    }

    /// Render one mono block of at most `config.block_size` samples.
    fn render_block(&mut self, len: usize) {
        let out = &mut self.block[..len];
        let scratch = &mut self.scratch[..len];
        out.fill(0.0);

        let sources: [&mut dyn GraphNode; 4] = [
            &mut self.sub,
            &mut self.noise,
            &mut self.osc_a,
            &mut self.osc_b,
        ];
        for source in sources {
            source.render_block(scratch, &self.ctx);
            sum_in_place(out, scratch);
        }

        self.filter.render_block(out, &self.ctx);
        self.master.render_block(out, &self.ctx);

        self.report_level(len);
        self.frames_rendered += len as u64;
    }

    #[cfg(feature = "rtrb")]
    fn report_level(&mut self, len: usize) {
        if let Some(meter) = self.meter.as_mut() {
            meter.push_block(&self.block[..len]);
        }
    }

    #[cfg(not(feature = "rtrb"))]
    fn report_level(&mut self, _len: usize) {}

    /// Fill a mono buffer of any length.
    pub fn render_mono(&mut self, out: &mut [f32]) {
        for chunk in out.chunks_mut(self.config.block_size) {
            self.render_block(chunk.len());
            chunk.copy_from_slice(&self.block[..chunk.len()]);
        }
    }

    /// Host processing entry point.
    ///
    /// The graph has no audio inputs, so `_input` is ignored. Every output
    /// channel receives the same mono mix, rendered over the shortest channel
    /// length. Always returns `true`: the graph is never torn down mid-run.
    pub fn process(&mut self, _input: &AudioInput, output: &mut AudioOutput) -> bool {
        let frames = output.frames();
        let mut offset = 0;
        while offset < frames {
            let len = (frames - offset).min(self.config.block_size);
            self.render_block(len);
            MasterBus::write_planar(&self.block[..len], &mut output.buffers, offset);
            offset += len;
        }
        true
    }

    /// Fill an interleaved device buffer with `channels` channels.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        if channels == 0 {
            return;
        }
        let frames = data.len() / channels;
        let usable = frames * channels;
        data[usable..].fill(0.0);

        for chunk in data[..usable].chunks_mut(self.config.block_size * channels) {
            let len = chunk.len() / channels;
            self.render_block(len);
            MasterBus::write_interleaved(&self.block[..len], chunk, channels);
        }
    }
}
