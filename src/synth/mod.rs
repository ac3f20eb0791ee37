// Purpose: build the fixed synth graph and hand out its control surface.
// The engine is the only owner of audio-side state; `Controls` is what the
// UI (or any other caller) holds on to.

pub mod config;
pub mod controls;
pub mod engine;

pub use config::EngineConfig;
pub use controls::{Controls, ParamSnapshot};
pub use engine::Engine;
