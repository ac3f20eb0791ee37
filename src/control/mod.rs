//! State shared between the control side and the audio callback.
//!
//! Each cell is a single atomic word: writers store the latest value, the
//! audio callback loads it once per block. There are no queues and no locks,
//! so the most recent write always wins and a write may land anywhere inside
//! a block.

/// Boolean section gate.
pub mod bypass;
/// Named continuous parameters.
pub mod param;

pub use bypass::BypassSwitch;
pub use param::Param;
