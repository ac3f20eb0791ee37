//! Lock-free output level meter.

use rtrb::{Consumer, Producer, RingBuffer};

use crate::dsp::amplify::peak;

/// Create a connected meter pair holding up to `capacity` unread readings.
pub fn level_meter(capacity: usize) -> (MeterTap, MeterReader) {
    let (tx, rx) = RingBuffer::new(capacity);
    (MeterTap { tx }, MeterReader { rx, last: 0.0 })
}

/// Audio-side end: pushes one peak reading per rendered block.
pub struct MeterTap {
    tx: Producer<f32>,
}

impl MeterTap {
    /// Never blocks; the reading is dropped when the reader has fallen behind.
    #[inline]
    pub fn push_block(&mut self, block: &[f32]) {
        let _ = self.tx.push(peak(block));
    }
}

/// Control-side end.
pub struct MeterReader {
    rx: Consumer<f32>,
    last: f32,
}

impl MeterReader {
    /// Most recent reading, draining anything older.
    pub fn latest(&mut self) -> f32 {
        while let Ok(level) = self.rx.pop() {
            self.last = level;
        }
        self.last
    }

    /// Loudest reading since the last call, or 0.0 if nothing arrived.
    pub fn drain_peak(&mut self) -> f32 {
        let mut loudest = 0.0f32;
        while let Ok(level) = self.rx.pop() {
            loudest = loudest.max(level);
            self.last = level;
        }
        loudest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_latest_peak() {
        let (mut tap, mut reader) = level_meter(8);
        tap.push_block(&[0.1, -0.4]);
        tap.push_block(&[0.2, 0.3]);
        assert_eq!(reader.latest(), 0.3);
        assert_eq!(reader.latest(), 0.3, "latest sticks until new data arrives");
    }

    #[test]
    fn drain_peak_returns_loudest() {
        let (mut tap, mut reader) = level_meter(8);
        tap.push_block(&[0.9]);
        tap.push_block(&[0.2]);
        assert_eq!(reader.drain_peak(), 0.9);
        assert_eq!(reader.drain_peak(), 0.0);
    }

    #[test]
    fn full_ring_drops_instead_of_blocking() {
        let (mut tap, mut reader) = level_meter(2);
        for level in [0.1, 0.2, 0.3, 0.4] {
            tap.push_block(&[level]);
        }
        assert_eq!(reader.latest(), 0.2);
    }
}
