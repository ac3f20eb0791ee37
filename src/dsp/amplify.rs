//! Gain stages over sample blocks.

/// Scale a block by a constant gain, in place.
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// Multiply a block by a per-sample gain curve, in place.
#[inline]
pub fn multiply_in_place(signal: &mut [f32], gain: &[f32]) {
    debug_assert_eq!(signal.len(), gain.len());

    for (s, &g) in signal.iter_mut().zip(gain.iter()) {
        *s *= g;
    }
}

/// `out += signal × gain`, sample by sample.
///
/// This is one voice's contribution to a mix bus.
#[inline]
pub fn multiply_accumulate(out: &mut [f32], signal: &[f32], gain: &[f32]) {
    debug_assert_eq!(out.len(), signal.len());
    debug_assert_eq!(out.len(), gain.len());

    for ((o, &s), &g) in out.iter_mut().zip(signal.iter()).zip(gain.iter()) {
        *o += s * g;
    }
}

/// Largest absolute sample value in the block.
#[inline]
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_gain() {
        let mut signal = [1.0, 0.5, -0.5, -1.0];
        apply_gain(&mut signal, 0.5);
        assert_eq!(signal, [0.5, 0.25, -0.25, -0.5]);
    }

    #[test]
    fn test_multiply_in_place() {
        let mut signal = [1.0, 0.5, -0.5, -1.0];
        multiply_in_place(&mut signal, &[0.0, 1.0, 2.0, 0.5]);
        assert_eq!(signal, [0.0, 0.5, -1.0, -0.5]);
    }

    #[test]
    fn test_multiply_accumulate_adds_onto_bus() {
        let mut bus = [0.25, 0.25, 0.25];
        multiply_accumulate(&mut bus, &[1.0, -1.0, 0.5], &[0.5, 0.5, 0.0]);
        assert_eq!(bus, [0.75, -0.25, 0.25]);
    }

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[0.1, -0.9, 0.3]), 0.9);
        assert_eq!(peak(&[]), 0.0);
    }
}
