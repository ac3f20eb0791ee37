//! Summing and crossfading primitives.

/*
Summing vs Crossfading
======================

SUM: the bus operation. Every source is added at its own level:

    out = a + b

Nothing keeps the result inside [-1.0, +1.0]; section levels and the master
volume are responsible for headroom.

CROSSFADE: choosing between two versions of the same signal, e.g. the
processed and unprocessed paths of a bypassable section:

    out = processed × g + passthrough × (1 - g)

The two weights always sum to 1, so at g = 0 or g = 1 exactly one path is
heard and neither is boosted. Linear weights dip slightly in perceived level
halfway through a fade; for the short fades used on bypass switches that is
inaudible.
*/

/// Add `b` into `a` in place.
#[inline]
pub fn sum_in_place(a: &mut [f32], b: &[f32]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa += sb;
    }
}

/// Linear blend of one sample pair.
#[inline]
pub fn blend(processed: f32, passthrough: f32, processed_gain: f32) -> f32 {
    processed * processed_gain + passthrough * (1.0 - processed_gain)
}

/// Crossfade `processed` against `passthrough`, writing into `processed`.
#[inline]
pub fn crossfade_in_place(processed: &mut [f32], passthrough: &[f32], processed_gain: f32) {
    debug_assert_eq!(processed.len(), passthrough.len());

    let processed_gain = processed_gain.clamp(0.0, 1.0);
    if processed_gain >= 1.0 {
        return;
    }
    if processed_gain <= 0.0 {
        processed.copy_from_slice(passthrough);
        return;
    }
    for (p, &t) in processed.iter_mut().zip(passthrough.iter()) {
        *p = blend(*p, t, processed_gain);
    }
}
