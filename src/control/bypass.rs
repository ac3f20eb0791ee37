use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Handle to a section's bypass flag.
///
/// `enabled == true` means the bypass is engaged: the section's processed
/// path is silenced and its passthrough path carries the signal.
#[derive(Debug, Clone, Default)]
pub struct BypassSwitch {
    engaged: Arc<AtomicBool>,
}

impl BypassSwitch {
    pub fn new(enabled: bool) -> Self {
        Self {
            engaged: Arc::new(AtomicBool::new(enabled)),
        }
    }

    #[inline]
    pub fn set_enabled(&self, enabled: bool) {
        self.engaged.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.engaged.load(Ordering::Relaxed)
    }

    /// Flip the flag, returning the new state.
    pub fn toggle(&self) -> bool {
        !self.engaged.fetch_xor(true, Ordering::Relaxed)
    }
}
