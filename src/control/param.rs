use std::{
    fmt,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

/*
Parameters (Knobs)
==================

A parameter is the one piece of state the UI thread and the audio thread
share. The UI writes it whenever a knob moves; the audio callback reads it
once at the start of every block and holds that value for the whole block.

    control thread:   set(0.2)      set(0.7)              set(0.9)
                         │             │                     │
    audio blocks:    [ 0.2 0.2 0.2 ][ 0.7 0.7 0.7 ][ 0.7 0.7 0.7 ][ 0.9 ...
                                    ↑
                        value sampled at block start (zero-order hold)

Storage
-------

`f32` has no atomic type in std, so the value is kept as its bit pattern in
an `AtomicU32`:

    store:  cell.store(value.to_bits(), Relaxed)
    load:   f32::from_bits(cell.load(Relaxed))

Relaxed ordering is enough: nothing else is published alongside the value,
and a reader only needs *a* complete value, never a torn one.

Range
-----

A parameter may carry an inclusive range. Writes outside it are clamped and
NaN writes are dropped, so a reader can never observe an undefined value.
*/

struct ParamCell {
    name: String,
    default: f32,
    min: f32,
    max: f32,
    bits: AtomicU32,
}

/// Handle to a named, continuously variable value.
///
/// Cloning the handle shares the same cell; every clone sees every write.
#[derive(Clone)]
pub struct Param {
    cell: Arc<ParamCell>,
}

impl Param {
    /// Create an unbounded parameter starting at `default`.
    pub fn new(name: impl Into<String>, default: f32) -> Self {
        Self::with_range(name, default, f32::NEG_INFINITY, f32::INFINITY)
    }

    /// Create a parameter whose writes are clamped to `[min, max]`.
    pub fn with_range(name: impl Into<String>, default: f32, min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "parameter range is inverted");
        let default = if default.is_nan() { 0.0 } else { default.clamp(min, max) };

        Self {
            cell: Arc::new(ParamCell {
                name: name.into(),
                default,
                min,
                max,
                bits: AtomicU32::new(default.to_bits()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.cell.name
    }

    /// Latest committed value.
    #[inline]
    pub fn value(&self) -> f32 {
        f32::from_bits(self.cell.bits.load(Ordering::Relaxed))
    }

    /// Commit a new value. Never blocks.
    ///
    /// NaN is ignored; anything else is clamped to the parameter's range.
    /// Writing the current value again leaves the cell untouched.
    pub fn set_value(&self, value: f32) {
        if value.is_nan() {
            return;
        }
        let bits = value.clamp(self.cell.min, self.cell.max).to_bits();
        if self.cell.bits.load(Ordering::Relaxed) != bits {
            self.cell.bits.store(bits, Ordering::Relaxed);
        }
    }

    pub fn default_value(&self) -> f32 {
        self.cell.default
    }

    pub fn range(&self) -> (f32, f32) {
        (self.cell.min, self.cell.max)
    }

    pub fn reset(&self) {
        self.set_value(self.cell.default);
    }

    /// Whether both handles point at the same cell.
    pub fn same_cell(&self, other: &Param) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("name", &self.cell.name)
            .field("value", &self.value())
            .finish()
    }
}
