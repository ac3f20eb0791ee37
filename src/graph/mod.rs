//! Block-rendering nodes and the synth sections built from them.
//!
//! Sources (`SubSection`, `NoiseSection`, `VoiceBank`) overwrite the block
//! they are given. Processors (`FilterSection`, `MasterBus`) transform the
//! block in place. The engine wires them into a fixed topology once; after
//! that only the values flowing through them change.

/// Processed/passthrough gate shared by every section.
pub mod bypass;
/// Filter section wiring.
pub mod filter;
/// Final gain stage and channel fan-out.
pub mod master;
/// Render context and the node trait.
pub mod node;
/// White noise section.
pub mod noise;
/// Sine sub-oscillator section.
pub mod sub;
/// Sixteen-slot unison oscillator section.
pub mod voice_bank;

pub use bypass::{BypassGains, BypassNode};
pub use filter::{FilterControls, FilterSection};
pub use master::{MasterBus, MasterControls};
pub use node::{GraphNode, RenderCtx, SectionControls};
pub use noise::{NoiseControls, NoiseSection};
pub use sub::{SubControls, SubSection};
pub use voice_bank::{OscillatorControls, VoiceBank};
