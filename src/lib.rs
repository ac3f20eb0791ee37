//! Salvation: a unison subtractive synthesizer engine.
//!
//! The engine is a fixed signal graph (sub, noise, two unison oscillators,
//! filter, master) rendered block by block. Control code talks to it only
//! through [`control::Param`] and [`control::BypassSwitch`] handles, which are
//! lock-free cells the audio side reads once per block.

pub mod control; // Shared parameter and bypass cells
pub mod dsp;
pub mod error;
pub mod graph; // Block-rendering nodes and synth sections
pub mod io;
pub mod synth; // Engine construction and control surface

pub use control::{BypassSwitch, Param};
pub use error::EngineError;
pub use synth::{Controls, Engine, EngineConfig};

/// Largest block rendered in one pass. Longer host buffers are split.
pub const MAX_BLOCK_SIZE: usize = 2048;

/// Voice slots allocated per oscillator section.
pub const MAX_UNISON_VOICES: usize = 16;
