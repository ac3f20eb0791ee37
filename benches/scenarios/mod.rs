//! Whole-engine benchmarks.
//!
//! These render the full fixed graph (sub, noise, two unison banks,
//! filter, master) the way a host callback would.

mod engine;

pub use engine::bench_engine;
