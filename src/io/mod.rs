// Purpose - buffers handed across the host boundary, the device host, and
// level metering

pub mod host;
#[cfg(feature = "rtrb")]
pub mod meter;

/// Planar input buffers, one `Vec` per channel.
#[derive(Debug, Default)]
pub struct AudioInput {
    pub buffers: Vec<Vec<f32>>,
}

/// Planar output buffers, one `Vec` per channel.
#[derive(Debug, Default)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    /// `channels` silent channels of `frames` samples each.
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; frames]; channels],
        }
    }

    /// Frames every channel can hold.
    pub fn frames(&self) -> usize {
        self.buffers.iter().map(Vec::len).min().unwrap_or(0)
    }

    pub fn channels(&self) -> usize {
        self.buffers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_is_shortest_channel() {
        let mut output = AudioOutput::new(2, 128);
        assert_eq!(output.frames(), 128);
        output.buffers[1].truncate(100);
        assert_eq!(output.frames(), 100);
        assert_eq!(AudioOutput::default().frames(), 0);
    }
}
